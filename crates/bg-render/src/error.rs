//! Error types for bg-render.

use thiserror::Error;

/// Errors that can occur while writing a transcript.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;
