use cinematch_api::api::{create_router, AppState};
use cinematch_api::catalog;
use cinematch_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Load phase: either everything the query paths need exists, or the
    // process refuses to start.
    tracing::info!("Loading movie data and models");
    let catalog = catalog::load(&config)?;

    let state = AppState::new(catalog);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
