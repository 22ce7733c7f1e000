/*!
 * Error types for the mpl2srt converter.
 *
 * This module contains custom error types for the different stages of a
 * conversion, using the thiserror crate for ergonomic error definitions.
 * Non-dialog input lines are not errors: they are skipped by the matcher.
 */

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when formatting an MPL2 time marker
#[derive(Error, Debug)]
pub enum FormatError {
    /// The marker bytes do not parse as an unsigned integer
    #[error("Invalid time marker '{marker}': {source}")]
    InvalidMarker {
        /// Lossy rendering of the offending bytes
        marker: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },
}

impl FormatError {
    pub(crate) fn invalid_marker(marker: &[u8], source: ParseIntError) -> Self {
        Self::InvalidMarker {
            marker: String::from_utf8_lossy(marker).into_owned(),
            source,
        }
    }
}

/// Errors that abort a conversion pass
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A matched dialog line carried an unusable time marker
    #[error("Format error at input line {line}: {source}")]
    Format {
        /// 1-based input line number
        line: usize,
        /// The formatter failure
        #[source]
        source: FormatError,
    },

    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading or saving the configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from the conversion pass
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
