//! recipeshare-types - Shared data types for RecipeShare
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types mirroring the
//! JSON exchanged with the recipe API.
//!
//! Used by:
//! - recipeshare-core (client logic)
//! - recipeshare-web (frontend WASM)

pub mod models;

pub use models::{
    AuthResponse, Comment, Ingredient, LoginRequest, NewComment, Recipe, RecipePayload,
    RegisterRequest, UploadResponse, User,
};
