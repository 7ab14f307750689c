//! Persisted login session
//!
//! The session outlives page reloads: the token and the serialized user are
//! written under [`TOKEN_KEY`] and [`USER_KEY`]. Both must be present and
//! valid for a session to load; anything else is treated as logged out.

use recipeshare_types::User;

use crate::config::bearer;
use crate::error::{ApiError, StorageError};
use crate::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Authenticated user plus the token proving it
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Restore the session saved by a previous page load
    ///
    /// A half-written or corrupt session is wiped so the next load starts clean.
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let token = store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let user = store.get(USER_KEY).and_then(|raw| {
            serde_json::from_str::<User>(&raw)
                .map_err(|e| tracing::warn!("Discarding unreadable stored user: {}", e))
                .ok()
        });

        match (token, user) {
            (Some(token), Some(user)) => Some(Self { token, user }),
            (None, None) => None,
            _ => {
                tracing::warn!("Incomplete stored session, clearing it");
                Self::clear(store);
                None
            }
        }
    }

    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        let user = serde_json::to_string(&self.user).map_err(|e| StorageError::Encode {
            key: USER_KEY.to_string(),
            message: e.to_string(),
        })?;
        store.set(TOKEN_KEY, &self.token)?;
        store.set(USER_KEY, &user)
    }

    pub fn clear(store: &impl KeyValueStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn authorization(&self) -> String {
        bearer(&self.token)
    }
}

/// Message shown on the login form when the credential call fails
pub fn login_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { message: Some(m), .. } => m.clone(),
        e if e.is_unauthorized() => "Invalid email or password".to_string(),
        e => e.user_message("Login failed"),
    }
}

pub const MIN_PASSWORD_LEN: usize = 6;

/// Inline error for the registration password, checked before submitting
pub fn password_error(password: &str) -> Option<String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        Some(format!("Password must be at least {} characters", MIN_PASSWORD_LEN))
    } else {
        None
    }
}

/// Message shown on the register form when the registration call fails
pub fn registration_failure_message(error: &ApiError) -> String {
    error.user_message("Registration failed")
}
