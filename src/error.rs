//! Error types for treemenu
//!
//! Uses `thiserror` for library errors. Each port and use case owns its own
//! error enum; `MenuError` covers the crate-level concerns (configuration,
//! I/O) that do not belong to any single use case.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for crate-level operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Crate-level error type
#[derive(Error, Debug)]
pub enum MenuError {
    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging subscriber could not be installed
    #[error("failed to initialize logging: {message}")]
    Logging { message: String },
}
