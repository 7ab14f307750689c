//! recipeshare - serves the built RecipeShare bundle

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "recipeshare",
    version,
    about = "RecipeShare bundle host",
    long_about = "Serves the RecipeShare single-page app built by Trunk.\n\
                  \n\
                  Static files come from the dist directory; every other path falls back to\n\
                  index.html so client-side routes survive a reload.\n\
                  \n\
                  Examples:\n\
                    recipeshare                            # Serve on 127.0.0.1:3000\n\
                    recipeshare serve --port 8000          # Custom port\n\
                    recipeshare serve --dist ./dist        # Custom bundle location\n\
                  \n\
                  Frontend Workflow:\n\
                    cd crates/recipeshare-web\n\
                    RECIPESHARE_API_URL=http://localhost:8080 trunk build --release\n\
                    cargo run -- serve"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the built bundle (default)
    Serve(ServeArgs),
}

#[derive(clap::Args)]
struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "RECIPESHARE_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "RECIPESHARE_PORT", default_value = "3000")]
    port: u16,

    /// Trunk output directory
    #[arg(long, env = "RECIPESHARE_DIST", default_value = "crates/recipeshare-web/dist")]
    dist: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let args = match cli.mode {
        Some(Mode::Serve(args)) => args,
        None => ServeArgs::parse_defaults()?,
    };

    run_serve(args).await
}

impl ServeArgs {
    /// Bare `recipeshare` behaves like `recipeshare serve`, env included
    fn parse_defaults() -> Result<Self> {
        #[derive(Parser)]
        struct Defaults {
            #[command(flatten)]
            args: ServeArgs,
        }

        Defaults::try_parse_from(["recipeshare"])
            .map(|d| d.args)
            .context("Invalid RECIPESHARE_* environment")
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let addr = SocketAddr::new(args.host, args.port);

    if bundle_ready(&args.dist) {
        println!("\n🍳 RecipeShare: http://{}", addr);
    } else {
        println!("\n🍳 RecipeShare (bundle missing): http://{}", addr);
        tracing::warn!(
            dist = %args.dist.display(),
            "No index.html found; run 'trunk build' in crates/recipeshare-web"
        );
    }

    recipeshare_web::run(addr, args.dist)
        .await
        .context("Bundle host stopped")
}

/// Whether Trunk has produced an app in `dist`
fn bundle_ready(dist: &Path) -> bool {
    dist.join("index.html").is_file()
}
