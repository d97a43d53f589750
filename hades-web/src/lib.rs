pub mod api;
pub mod config;
pub mod csp;
pub mod error;
pub mod nonce;
pub mod shell;

pub use api::{create_router, AppState};
