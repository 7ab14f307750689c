//! Bundle host using Axum
//!
//! Serves the Trunk output directory. Unknown paths fall back to
//! `index.html` so deep links like `/recipe/abc` boot the app, which then
//! routes client-side.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::path::PathBuf;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the bundle host router for a Trunk `dist` directory
pub fn create_router(dist: impl Into<PathBuf>) -> Router {
    let dist = dist.into();
    let index = dist.join("index.html");

    let spa_fallback = get(move || spa_index(index.clone()));

    Router::new()
        .route("/healthz", get(health_handler))
        .fallback_service(ServeDir::new(&dist).fallback(spa_fallback))
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn spa_index(index: PathBuf) -> Response {
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!(path = %index.display(), "Bundle not built: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, Html(BUILD_REQUIRED_PAGE)).into_response()
        }
    }
}

const BUILD_REQUIRED_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>RecipeShare - Build Required</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #fff7ed;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 12px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 1.75rem; margin-bottom: 1rem; color: #1a1a1a; }
        p { margin-bottom: 1rem; color: #333; line-height: 1.6; }
        code {
            background: #f4f4f5;
            padding: 0.2rem 0.4rem;
            border-radius: 4px;
            font-family: monospace;
        }
        ol { margin-left: 1.5rem; line-height: 1.8; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>RecipeShare - Build Required</h1>
        <p>The WASM bundle has not been built yet, so there is nothing to serve.</p>
        <ol>
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add the WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build the app: <code>cd crates/recipeshare-web &amp;&amp; trunk build --release</code></li>
            <li>Restart: <code>cargo run -- serve</code></li>
        </ol>
    </div>
</body>
</html>"#;
