//! API data models

mod auth;
mod comment;
mod recipe;
mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, UploadResponse};
pub use comment::{Comment, NewComment};
pub use recipe::{Ingredient, Recipe, RecipePayload};
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
///
/// The backend sends `"steps": null` for recipes saved without steps, which
/// `#[serde(default)]` alone rejects.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Server-side id, which some deployments send as a number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
            RawId::Uint(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        }
    }
}

/// Accept `"7"` and `7` alike; `null` becomes an empty id
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?
        .map(RawId::into_string)
        .unwrap_or_default())
}

/// Id list counterpart of [`string_or_number`]
pub(crate) fn ids_or_numbers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RawId>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(RawId::into_string)
        .collect())
}
