//! recipeshare-core - Core library for RecipeShare
//!
//! Client-side logic that does not touch the browser: the error taxonomy,
//! endpoint and route tables, session and theme persistence, the route guard
//! decision, home feed filtering, recipe form drafts and optimistic social
//! toggles. Everything here runs (and is tested) natively.

pub mod config;
pub mod display;
pub mod endpoints;
pub mod error;
pub mod feed;
pub mod form;
pub mod guard;
pub mod profile;
pub mod routes;
pub mod session;
pub mod social;
pub mod storage;
pub mod theme;

pub use config::ApiConfig;
pub use error::{ApiError, StorageError};
pub use feed::{filter_and_sort, FeedFilter};
pub use form::{Field, FormErrors, IngredientField, IngredientRow, RecipeDraft, RowId, StepRow};
pub use guard::Access;
pub use session::Session;
pub use social::{FollowState, LikeState};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::Theme;

pub use recipeshare_types as types;
