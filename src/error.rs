//! Error types for QEasy operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using QEasy's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for QEasy operations
#[derive(Error, Debug)]
pub enum Error {
    /// The payload was rejected before any work was done
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    Encoding(String),

    /// Directory creation or file write failed
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        /// Path that was being created or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrCodeFound,

    /// The written image does not decode back to the payload
    #[error("Verification failed: expected {expected:?}, decoded {actual:?}")]
    Verification {
        /// Payload that was encoded
        expected: String,
        /// Payload read back from the written file
        actual: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap an I/O failure with the path it occurred on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Process exit code reported by the CLI for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidInput(_) | Error::Encoding(_) => 1,
            Error::Filesystem { .. } | Error::Image(_) | Error::Io(_) => 2,
            Error::QrDecode(_)
            | Error::NoQrCodeFound
            | Error::Verification { .. }
            | Error::Config(_) => 3,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::Encoding(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(format!("JSON error: {}", e))
    }
}
