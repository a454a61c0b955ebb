//! Error types for filepick
//!
//! The domain has no recoverable failures; these cover the toolkit and
//! process setup.

use thiserror::Error;

/// Main error type for filepick
#[derive(Error, Debug)]
pub enum FilePickError {
    #[error("GUI error: {0}")]
    Gui(String),

    #[error("Failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Result type alias for filepick operations
pub type Result<T> = std::result::Result<T, FilePickError>;

impl FilePickError {
    /// Wrap an eframe start-up or runtime failure
    pub fn from_eframe(err: eframe::Error) -> Self {
        FilePickError::Gui(err.to_string())
    }
}
