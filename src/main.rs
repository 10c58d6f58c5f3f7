mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(config.environment);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, config.environment).await?;

    let app = router::app(AppState::new(db), config.cors_origin()?, session);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }

    tracing::info!("Shutting down");
}
