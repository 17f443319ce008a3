/*!
 * Tests for the library error type
 */

use std::error::Error;
use std::io;
use std::path::PathBuf;

use encremagique::errors::CaptionError;

/// Test that configuration errors are classified
#[test]
fn test_is_configuration_error_shouldClassifyVariants() {
    assert!(CaptionError::UnsupportedLanguage("fr".to_string()).is_configuration_error());
    assert!(CaptionError::InvalidConfig("zero".to_string()).is_configuration_error());

    let io_error = CaptionError::Io {
        path: PathBuf::from("out.srt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(!io_error.is_configuration_error());
}

/// Test the error messages
#[test]
fn test_display_shouldDescribeError() {
    assert_eq!(
        CaptionError::UnsupportedLanguage("fr".to_string()).to_string(),
        "Unsupported language: fr"
    );

    let io_error = CaptionError::Io {
        path: PathBuf::from("out.srt"),
        source: io::Error::new(io::ErrorKind::NotFound, "missing"),
    };
    assert_eq!(io_error.to_string(), "Failed to write subtitle file out.srt: missing");
}

/// Test that the I/O cause is kept as the error source
#[test]
fn test_io_error_shouldExposeSource() {
    let io_error = CaptionError::Io {
        path: PathBuf::from("out.srt"),
        source: io::Error::new(io::ErrorKind::NotFound, "missing"),
    };

    let source = io_error.source().and_then(|s| s.downcast_ref::<io::Error>());
    assert_eq!(source.map(io::Error::kind), Some(io::ErrorKind::NotFound));
}

/// Test conversion into anyhow for the command line
#[test]
fn test_into_anyhow_shouldKeepMessage() {
    let err: anyhow::Error = CaptionError::InvalidConfig("seconds_per_line must be greater than zero".to_string()).into();
    assert_eq!(err.to_string(), "Invalid configuration: seconds_per_line must be greater than zero");
}
