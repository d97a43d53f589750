use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::{FrontendError, Result};

use super::AppState;

static HTML_UTF8: HeaderValue = HeaderValue::from_static("text/html; charset=utf-8");

/// Entry point for everything that is not under `/assets/`.
pub async fn serve_route(State(state): State<AppState>, uri: Uri) -> Response {
    if !state.routes.matches(uri.path()) {
        return FrontendError::NotFound.into_response();
    }

    match render_shell(&state) {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

pub async fn serve_asset(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    match state.assets.response_for(&path) {
        Some(response) => response,
        None => FrontendError::NotFound.into_response(),
    }
}

/// Draws one nonce and uses it for both the header and the body.
fn render_shell(state: &AppState) -> Result<Response> {
    let nonce = state.nonces.next_nonce()?;
    let policy = state.csp.header_value(&nonce)?;
    let body = state.shell.render(&nonce)?;

    let mut response = (StatusCode::OK, body).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_SECURITY_POLICY, policy);
    headers.insert(header::CONTENT_TYPE, HTML_UTF8.clone());
    Ok(response)
}
