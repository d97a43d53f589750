// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Once;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use tower::ServiceExt;

use hades_web::api::{create_router, AppState, AssetTree, RouteProfile};
use hades_web::config::Config;
use hades_web::csp::ConnectSources;

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn test_config(profile: RouteProfile, connect_sources: ConnectSources) -> Config {
    Config {
        port: 0,
        connect_sources,
        profile,
    }
}

pub fn test_app() -> Router {
    app_with(test_config(RouteProfile::Soc, ConnectSources::Fixed))
}

pub fn app_with(config: Config) -> Router {
    init_test_logger();
    let assets = AssetTree::ensure_present().expect("embedded assets");
    create_router(AppState::new(config, assets))
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn csp_of(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::CONTENT_SECURITY_POLICY)
        .expect("Content-Security-Policy header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Every value inside `'nonce-...'` in a policy string.
pub fn policy_nonces(policy: &str) -> Vec<String> {
    policy
        .split("'nonce-")
        .skip(1)
        .map(|rest| rest.split('\'').next().unwrap_or_default().to_string())
        .collect()
}

/// Every value of a `nonce="..."` attribute in the rendered shell.
pub fn body_nonces(body: &str) -> Vec<String> {
    body.split("nonce=\"")
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap_or_default().to_string())
        .collect()
}

/// Asserts header/body nonce binding and returns the nonce.
pub fn assert_bound_nonce(policy: &str, body: &str) -> String {
    let in_policy = policy_nonces(policy);
    let in_body = body_nonces(body);

    assert_eq!(in_policy.len(), 3, "policy: {policy}");
    assert!(!in_body.is_empty(), "shell has no nonce sites");

    let nonce = in_policy[0].clone();
    assert_eq!(nonce.len(), 24);
    assert!(in_policy.iter().all(|n| *n == nonce));
    assert!(in_body.iter().all(|n| *n == nonce));

    assert!(!policy.contains("Nonce"));
    assert!(!body.contains("Nonce"));
    nonce
}
