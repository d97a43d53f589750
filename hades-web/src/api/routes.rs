use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;

use crate::error::Result;

use super::frontend::{serve_asset, serve_route};
use super::security::nosniff_layer;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    // SPA paths are matched against the allow-list in the fallback; there is
    // no fall-through from there to the file server. Both answer any method.
    Router::new()
        .route("/assets/{*path}", any(serve_asset))
        .fallback(serve_route)
        .layer(nosniff_layer())
        .with_state(state)
}

/// Binds the listener; failures surface as `FrontendError::Io`.
pub async fn bind_listener(addr: &str) -> Result<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}
