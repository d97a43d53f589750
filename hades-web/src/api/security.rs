use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

static NOSNIFF: HeaderValue = HeaderValue::from_static("nosniff");

/// Adds `X-Content-Type-Options: nosniff` to every response. A value set by
/// the inner handler is kept.
pub fn nosniff_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(header::X_CONTENT_TYPE_OPTIONS, NOSNIFF.clone())
}
