use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("{0}")]
    StartupMisconfiguration(String),

    #[error("Template render error: {0}")]
    TemplateRender(#[from] askama::Error),

    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(#[from] rand::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),

    #[error("Not Found")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for FrontendError {
    fn into_response(self) -> Response {
        let status = match &self {
            FrontendError::NotFound => StatusCode::NOT_FOUND,
            FrontendError::StartupMisconfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FrontendError::TemplateRender(e) => {
                tracing::error!("Shell render failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            FrontendError::RandomSourceUnavailable(e) => {
                tracing::error!("Nonce generation failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            FrontendError::InvalidHeader(e) => {
                tracing::error!("Refusing to emit header: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            FrontendError::Io(e) => {
                tracing::error!("IO error while serving request: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal details stay in the log; clients only get the reason phrase.
        let body = status.canonical_reason().unwrap_or("Error");

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, FrontendError>;
