//! QEasy - QR codes for restaurant menu and table links
//!
//! Turns a URL (or any non-empty text) into a scannable black-on-white PNG,
//! saved under a chosen name or an auto-generated timestamped one.
//!
//! # Example
//!
//! ```no_run
//! use qeasy::QrGenerator;
//!
//! fn main() -> qeasy::Result<()> {
//!     let generated = QrGenerator::new()
//!         .generate("https://menu.example.com/table/5", Some("table5"))?;
//!
//!     println!("QR code saved to {}", generated.path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod qr;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{ErrorCorrection, LogRotation, LoggingOptions, OutputOptions, QeasyConfig, QrOptions};
pub use generator::{GeneratedQr, QrGenerator};
pub use output::OutputNaming;
pub use qr::{EncodedQr, QrDecoder, QrEncoder, QrPayload};
