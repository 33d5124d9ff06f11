//! Errors raised while setting up a render.
//!
//! Tracing itself never fails: degenerate geometry and absorbed rays are
//! handled locally. Only bad setup parameters and output I/O end up here.

use thiserror::Error;

/// Errors that can occur when preparing or writing a render.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
