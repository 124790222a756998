//! Application-level error types.

use thiserror::Error;

/// Errors that can occur within the application.
///
/// Only startup can fail; every button action is infallible.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GUI toolkit error: {0}")]
    Toolkit(#[from] eframe::Error),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
