//! Opsboard - admin dashboard backend
//! Mission: Token-gated user administration API with dashboard feeds

use anyhow::{Context, Result};
use opsboard_backend::{
    api::{self, AppState},
    auth::{JwtHandler, UserStore},
    config::Config,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let Config { port, jwt_secret } = Config::from_env();

    let store = Arc::new(UserStore::new().context("Failed to seed user store")?);
    let jwt = Arc::new(JwtHandler::new(jwt_secret));

    let app = api::router(AppState { store, jwt });

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("🎯 API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with env-filter overrides.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opsboard_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
