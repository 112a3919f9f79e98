//! navGuard gateway
//!
//! - Guarded pages: 307 to the entry point or home per the access policy
//! - `GET /v1/decide?path=...`: verdict as JSON
//! - `GET /healthz`
//!
//! Config path comes from `NAVGUARD_CONFIG` (default `navguard.yaml`).

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use navguard_core::error::{NavGuardError, Result};
use navguard_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("NAVGUARD_CONFIG").unwrap_or_else(|_| "navguard.yaml".into());
    let cfg = config::load_from_file(&path)?;
    let listen: SocketAddr = cfg.gateway.listen.parse().map_err(|e| {
        NavGuardError::BadRequest(format!("gateway.listen must be a valid SocketAddr: {e}"))
    })?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "navguard-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| NavGuardError::Internal(format!("failed to bind: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| NavGuardError::Internal(format!("server failed: {e}")))
}
