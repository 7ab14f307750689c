//! API client for the recipe backend
//!
//! Every call goes through [`ApiClient`], which attaches the session token,
//! maps failures into [`ApiError`] and logs them. Views never see a raw
//! `gloo_net` error.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use recipeshare_core::config::bearer;
use recipeshare_core::{endpoints, ApiConfig, ApiError};
use recipeshare_types::{
    AuthResponse, Comment, LoginRequest, NewComment, Recipe, RecipePayload, RegisterRequest,
    UploadResponse, User,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Delete => Request::delete(url),
        }
    }
}

/// Handle to the backend, provided as context at the app root
#[derive(Clone, Copy)]
pub struct ApiClient {
    config: StoredValue<ApiConfig>,
    token: Signal<Option<String>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, token: impl Into<Signal<Option<String>>>) -> Self {
        Self {
            config: StoredValue::new(config),
            token: token.into(),
        }
    }

    fn request(&self, verb: Verb, path: &str) -> RequestBuilder {
        self.request_as(verb, path, self.token.get_untracked())
    }

    fn request_as(&self, verb: Verb, path: &str, token: Option<String>) -> RequestBuilder {
        let url = self.config.with_value(|config| config.url(path));
        let builder = verb.builder(&url);
        match token {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    // ── Transport ────────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Verb::Get, path).build();
        let response = execute(Verb::Get, path, request).await?;
        decode(Verb::Get, path, response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Verb::Post, path).json(body);
        let response = execute(Verb::Post, path, request).await?;
        decode(Verb::Post, path, response).await
    }

    /// Send without caring about the response body
    async fn send<B: Serialize>(self, verb: Verb, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        let builder = self.request(verb, path);
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        };
        execute(verb, path, request).await.map(|_| ())
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn login(self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post(endpoints::LOGIN, credentials).await
    }

    pub async fn register(self, account: &RegisterRequest) -> Result<(), ApiError> {
        self.send(Verb::Post, endpoints::REGISTER, Some(account)).await
    }

    // ── Users ────────────────────────────────────────────────────────────

    pub async fn profile(self) -> Result<User, ApiError> {
        self.get(endpoints::PROFILE).await
    }

    /// Profile lookup with a token that is not stored yet (right after login)
    pub async fn profile_for(self, token: &str) -> Result<User, ApiError> {
        let path = endpoints::PROFILE;
        let request = self
            .request_as(Verb::Get, path, Some(token.to_string()))
            .build();
        let response = execute(Verb::Get, path, request).await?;
        decode(Verb::Get, path, response).await
    }

    pub async fn user(self, id: &str) -> Result<User, ApiError> {
        self.get(&endpoints::user(id)).await
    }

    pub async fn follow(self, id: &str) -> Result<(), ApiError> {
        self.send::<()>(Verb::Post, &endpoints::follow_user(id), None)
            .await
    }

    // ── Recipes ──────────────────────────────────────────────────────────

    pub async fn recipes(self) -> Result<Vec<Recipe>, ApiError> {
        self.get(endpoints::ALL_RECIPES).await
    }

    pub async fn recipe(self, id: &str) -> Result<Recipe, ApiError> {
        self.get(&endpoints::recipe(id)).await
    }

    /// Create a recipe; `None` when the server does not echo the new recipe
    pub async fn create_recipe(self, payload: &RecipePayload) -> Result<Option<Recipe>, ApiError> {
        let path = endpoints::CREATE_RECIPE;
        let request = self.request(Verb::Post, path).json(payload);
        let response = execute(Verb::Post, path, request).await?;
        let body = response.text().await.unwrap_or_else(|e| {
            tracing::debug!(path, "Could not read create response body: {}", e);
            String::new()
        });

        let created = serde_json::from_str::<Recipe>(&body)
            .ok()
            .filter(|recipe| !recipe.id.is_empty());
        tracing::info!(
            id = created.as_ref().map(|r| r.id.as_str()).unwrap_or("-"),
            "Recipe created"
        );
        Ok(created)
    }

    pub async fn update_recipe(self, id: &str, payload: &RecipePayload) -> Result<(), ApiError> {
        self.send(Verb::Put, &endpoints::update_recipe(id), Some(payload))
            .await?;
        tracing::info!(id, "Recipe updated");
        Ok(())
    }

    pub async fn delete_recipe(self, id: &str) -> Result<(), ApiError> {
        self.send::<()>(Verb::Delete, &endpoints::delete_recipe(id), None)
            .await?;
        tracing::info!(id, "Recipe deleted");
        Ok(())
    }

    pub async fn like(self, id: &str) -> Result<(), ApiError> {
        self.send::<()>(Verb::Post, &endpoints::like_recipe(id), None)
            .await
    }

    pub async fn comments(self, id: &str) -> Result<Vec<Comment>, ApiError> {
        self.get(&endpoints::recipe_comments(id)).await
    }

    pub async fn comment(self, id: &str, text: &str) -> Result<Comment, ApiError> {
        let body = NewComment {
            text: text.to_string(),
        };
        self.post(&endpoints::comment_recipe(id), &body).await
    }

    /// Upload an image as `multipart/form-data` (single `file` part)
    pub async fn upload_image(self, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        let path = endpoints::IMAGE_UPLOAD;
        let form = web_sys::FormData::new()
            .and_then(|form| {
                form.append_with_blob_and_filename("file", file, &file.name())?;
                Ok(form)
            })
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        // No Content-Type header: the browser adds the multipart boundary
        let request = self.request(Verb::Post, path).body(form);
        let response = execute(Verb::Post, path, request).await?;
        decode(Verb::Post, path, response).await
    }
}

async fn execute(
    verb: Verb,
    path: &str,
    request: Result<Request, gloo_net::Error>,
) -> Result<Response, ApiError> {
    dispatch(verb, path, request).await.inspect_err(|e| {
        tracing::warn!(method = verb.as_str(), path, error = %e, "API call failed");
    })
}

async fn dispatch(
    verb: Verb,
    path: &str,
    request: Result<Request, gloo_net::Error>,
) -> Result<Response, ApiError> {
    let request = request.map_err(|e| ApiError::Request(e.to_string()))?;
    tracing::debug!(method = verb.as_str(), path, "Sending request");

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), &body));
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    response: Response,
) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        let error = ApiError::Decode(e.to_string());
        tracing::warn!(method = verb.as_str(), path, error = %error, "API call failed");
        error
    })
}

/// Hook to access the API client
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
