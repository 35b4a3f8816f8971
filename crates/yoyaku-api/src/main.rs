//! Yoyaku API server.

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use yoyaku_api::{AppState, routes};
use yoyaku_config::Config;
use yoyaku_db::{bootstrap, create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();

    // A failed bootstrap leaves the server running so the failure stays
    // observable through /test instead of a dead process.
    match bootstrap(&config).await {
        Ok(()) => info!("database bootstrap complete"),
        Err(err) => error!(%err, "database bootstrap failed, continuing"),
    }

    let pool = create_pool(&config);
    let state = AppState::new(pool);

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    info!("starting server on {}", addr);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%err, "failed to bind {}", addr);
            return Err(err.into());
        }
    };
    axum::serve(listener, app).await?;

    Ok(())
}
