/*!
 * Error types for the encremagique library.
 *
 * Caption generation only fails in two ways: the caller asked for something
 * the pipeline cannot be configured to do, or the subtitle file could not be
 * written. Both are surfaced unmodified through `CaptionError`.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or running the caption pipeline
#[derive(Error, Debug)]
pub enum CaptionError {
    /// The language tag has no registered processor
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A configuration value violates the pipeline contract
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The subtitle file could not be written
    #[error("Failed to write subtitle file {}: {source}", path.display())]
    Io {
        /// Target path of the write
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl CaptionError {
    /// Whether the error was raised while validating configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage(_) | Self::InvalidConfig(_))
    }
}

/// Result alias used across the library
pub type CaptionResult<T> = std::result::Result<T, CaptionError>;
