//! Error types for the kino.mail.ru scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for kino.mail.ru scraper operations
#[derive(Error, Debug)]
pub enum KinoError {
    /// HTTP request failed (transport error, timeout, or non-success status)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Requested film count is outside the supported range
    #[error("Invalid film count {0}: must be between 1 and 150")]
    InvalidCount(u32),

    /// JSON serialization failed
    #[error("JSON export failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// CSV serialization failed
    #[error("CSV export failed: {0}")]
    CsvError(#[from] csv::Error),

    /// XLSX workbook write failed
    #[error("XLSX export failed: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    /// File system error while writing an export
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for kino.mail.ru scraper operations
pub type Result<T> = std::result::Result<T, KinoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse_error() {
        let error = KinoError::ParseError("missing element".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: missing element");
    }

    #[test]
    fn test_error_display_invalid_count_zero() {
        let error = KinoError::InvalidCount(0);
        assert_eq!(
            error.to_string(),
            "Invalid film count 0: must be between 1 and 150"
        );
    }

    #[test]
    fn test_error_display_invalid_count_over_limit() {
        let error = KinoError::InvalidCount(151);
        assert!(error.to_string().contains("151"));
        assert!(error.to_string().contains("between 1 and 150"));
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = KinoError::from(io);
        assert!(error.to_string().contains("gone"));
    }
}
