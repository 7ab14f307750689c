//! recipeshare-web - Browser frontend for RecipeShare using Leptos
//!
//! Built to WASM with Trunk (`csr` feature). The `server` feature adds a small
//! Axum host that serves the built bundle with an SPA fallback.

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod storage;
pub mod utils;

#[cfg(feature = "server")]
pub mod router;

pub use app::App;

#[cfg(feature = "server")]
pub use router::create_router;

#[cfg(feature = "server")]
pub async fn run(addr: std::net::SocketAddr, dist: std::path::PathBuf) -> anyhow::Result<()> {
    use anyhow::Context;
    use tokio::net::TcpListener;

    let router = create_router(dist.clone());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(dist = %dist.display(), "RecipeShare listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
