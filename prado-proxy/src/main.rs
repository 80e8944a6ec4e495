mod catalog;
mod notion;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tower_http::services::ServeDir;
use tracing::{error, info};

use catalog::{catalog_router, ProxyState};
use notion::NotionClient;

/// Read-side proxy for the Prado Companion catalog - terminates the Notion
/// API so the browser never sees the bearer token.
#[derive(Parser)]
#[command(name = "prado-proxy")]
struct Args {
    /// Notion integration token. Held server-side only.
    #[arg(long, env = "NOTION_API_KEY")]
    notion_token: String,

    /// Notion database holding the artwork catalog.
    #[arg(
        long,
        default_value = "2ed458a818df8095a9b8daa08c51418a",
        env = "NOTION_DATABASE_ID"
    )]
    database_id: String,

    /// Port to listen on.
    #[arg(long, default_value = "8788", env = "PRADO_PORT")]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0", env = "PRADO_BIND")]
    bind: String,

    /// Path to the built prado-web dist directory (serves the app too).
    #[arg(long, env = "PRADO_WEB_DIR")]
    web_dir: Option<PathBuf>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    info!("prado-proxy starting");

    let state = ProxyState {
        notion: Arc::new(NotionClient::new(args.notion_token, args.database_id)),
    };

    let mut app = catalog_router(state);
    if let Some(web_dir) = &args.web_dir {
        info!("serving web app from {}", web_dir.display());
        app = app.fallback_service(ServeDir::new(web_dir));
    }

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        });

    info!("listening on {addr}");
    axum::serve(listener, app).await.unwrap_or_else(|e| {
        error!("server error: {e}");
        std::process::exit(1);
    });
}
