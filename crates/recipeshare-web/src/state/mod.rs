//! App-wide contexts provided at the root

pub mod auth;
pub mod theme;

pub use auth::{provide_auth_context, use_auth, AuthContext};
pub use theme::{provide_theme_context, use_theme, ThemeContext};
