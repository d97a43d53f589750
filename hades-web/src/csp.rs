//! Content-Security-Policy header assembly.
//!
//! The directive list is fixed; only the nonce (per response) and the
//! `connect-src` origins (per process) vary. The nonce is interpolated
//! directly instead of string-replacing a placeholder, so origins can never
//! be corrupted by the substitution.

use axum::http::HeaderValue;

use crate::error::Result;
use crate::nonce::Nonce;

/// Origins the SPA talks to when no backend is configured.
pub const FIXED_CONNECT_ORIGINS: [&str; 2] = ["http://localhost:8000", "http://backend:8000"];

/// Extra `connect-src` origins, chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectSources {
    /// The hard-coded development and compose origins.
    Fixed,
    /// A configured backend `host[:port]`, reached over HTTP and WebSocket.
    Backend(String),
}

impl ConnectSources {
    pub fn origins(&self) -> Vec<String> {
        match self {
            ConnectSources::Fixed => FIXED_CONNECT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            ConnectSources::Backend(backend) => vec![backend.clone(), format!("ws://{backend}")],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContentSecurityPolicy {
    connect_src: String,
}

impl ContentSecurityPolicy {
    pub fn new(sources: &ConnectSources) -> Self {
        let mut connect_src = String::from("connect-src 'self'");
        for origin in sources.origins() {
            connect_src.push(' ');
            connect_src.push_str(&origin);
        }
        Self { connect_src }
    }

    /// Assembles the header value for one response.
    pub fn render(&self, nonce: &str) -> String {
        [
            "default-src 'self'".to_string(),
            format!("script-src 'self' 'nonce-{nonce}'"),
            format!("style-src 'self' 'nonce-{nonce}'"),
            format!("style-src-elem 'self' 'nonce-{nonce}'"),
            "frame-ancestors 'self'".to_string(),
            "form-action 'self'".to_string(),
            self.connect_src.clone(),
        ]
        .join(";")
    }

    pub fn header_value(&self, nonce: &Nonce) -> Result<HeaderValue> {
        Ok(HeaderValue::from_str(&self.render(nonce.as_str()))?)
    }

    pub fn connect_src(&self) -> &str {
        &self.connect_src
    }
}
