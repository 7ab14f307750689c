//! Authentication context
//!
//! Holds the logged-in user and token as signals. The session is restored
//! from `localStorage` at startup and cleared again on logout.

use leptos::prelude::*;
use recipeshare_core::session::{login_failure_message, registration_failure_message};
use recipeshare_core::{ApiConfig, ApiError, Session};
use recipeshare_types::{LoginRequest, RegisterRequest, User};

use crate::api::ApiClient;
use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<User>>,
    token: RwSignal<Option<String>>,
    api: ApiClient,
}

impl AuthContext {
    /// Current user (tracked)
    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn user_untracked(&self) -> Option<User> {
        self.user.get_untracked()
    }

    pub fn user_id_untracked(&self) -> Option<String> {
        self.user.with_untracked(|user| user.as_ref().map(|u| u.id.clone()))
    }

    /// Whether someone is logged in (tracked)
    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Exchange credentials for a session
    ///
    /// On failure the returned message is ready to show on the form.
    pub async fn login(self, credentials: LoginRequest) -> Result<(), String> {
        let session = self
            .authenticate(&credentials)
            .await
            .map_err(|e| login_failure_message(&e))?;

        if let Err(e) = session.save(&BrowserStorage) {
            tracing::warn!("Failed to persist session: {}", e);
        }
        tracing::info!(user = %session.user.username, "Logged in");

        self.token.set(Some(session.token));
        self.user.set(Some(session.user));
        Ok(())
    }

    async fn authenticate(self, credentials: &LoginRequest) -> Result<Session, ApiError> {
        let response = self.api.login(credentials).await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::Decode("login response carried no token".to_string()));
        }

        let user = match response.user {
            Some(user) => user,
            None => self.api.profile_for(&response.token).await?,
        };
        Ok(Session::new(response.token, user))
    }

    /// Create an account; does not log in
    pub async fn register(self, account: RegisterRequest) -> Result<(), String> {
        self.api
            .register(&account)
            .await
            .map_err(|e| registration_failure_message(&e))?;
        tracing::info!(user = %account.username, "Registered");
        Ok(())
    }

    pub fn logout(&self) {
        Session::clear(&BrowserStorage);
        self.token.set(None);
        self.user.set(None);
        tracing::info!("Logged out");
    }
}

/// Restore the saved session and provide both the API client and the auth
/// context to the tree
pub fn provide_auth_context(config: ApiConfig) -> AuthContext {
    let session = Session::load(&BrowserStorage);
    let token = RwSignal::new(session.as_ref().map(|s| s.token.clone()));
    let user = RwSignal::new(session.map(|s| s.user));

    let api = ApiClient::new(config, token);
    provide_context(api);

    let auth = AuthContext { user, token, api };
    provide_context(auth);
    auth
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
