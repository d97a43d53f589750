use clap::Parser;

use crate::api::RouteProfile;
use crate::csp::ConnectSources;
use crate::error::{FrontendError, Result};

pub const DEFAULT_PORT: u16 = 5173;

#[derive(Debug, Parser)]
#[command(name = "hades-web")]
#[command(about = "Serves the Hades SPA shell and assets with per-response CSP nonces")]
#[command(version)]
pub struct Args {
    /// Port to listen for requests
    #[arg(short = 'p', long = "port", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Backend host[:port] allowed in connect-src (HTTP and WebSocket)
    #[arg(short = 'b', long = "backend")]
    pub backend: Option<String>,

    /// SPA route set to serve the shell on
    #[arg(long, value_enum, default_value_t = RouteProfile::Soc)]
    pub profile: RouteProfile,
}

/// Immutable process configuration, populated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub connect_sources: ConnectSources,
    pub profile: RouteProfile,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let connect_sources = match args.backend {
            Some(backend) => ConnectSources::Backend(validate_backend(&backend)?),
            None => ConnectSources::Fixed,
        };

        Ok(Self {
            port: args.port,
            connect_sources,
            profile: args.profile,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            connect_sources: ConnectSources::Fixed,
            profile: RouteProfile::default(),
        }
    }
}

/// Checks that `-b` is a bare `host[:port]` and returns it verbatim.
fn validate_backend(backend: &str) -> Result<String> {
    if backend.is_empty() {
        return Err(misconfigured("An argument for the 'b' parameter is required"));
    }

    if backend
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || matches!(c, ';' | ',' | '\'' | '"'))
    {
        return Err(misconfigured(format!(
            "Invalid backend '{backend}': unexpected character"
        )));
    }

    let url = url::Url::parse(&format!("http://{backend}"))
        .map_err(|e| misconfigured(format!("Invalid backend '{backend}': {e}")))?;

    let bare = url.host_str().is_some()
        && url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.password().is_none()
        && !backend.contains('/')
        && !backend.ends_with(':');

    if !bare {
        return Err(misconfigured(format!(
            "Invalid backend '{backend}': expected host or host:port"
        )));
    }

    Ok(backend.to_string())
}

fn misconfigured(message: impl std::fmt::Display) -> FrontendError {
    FrontendError::StartupMisconfiguration(format!("[x] {message}"))
}
