//! Leptos UI components

mod error_state;
mod filter_bar;
mod navbar;
mod recipe_card;
mod recipe_form;
mod route_guard;
mod spinner;
mod toast;

pub use error_state::{EmptyState, ErrorState};
pub use filter_bar::FilterBar;
pub use navbar::Navbar;
pub use recipe_card::{RecipeCard, FALLBACK_IMAGE};
pub use recipe_form::RecipeForm;
pub use route_guard::RouteGuard;
pub use spinner::Spinner;
pub use toast::{use_toast, Toast, ToastContext, ToastKind, ToastProvider};
