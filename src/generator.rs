//! Payload-to-file QR generation

use crate::config::QeasyConfig;
use crate::error::{Error, Result};
use crate::output::OutputNaming;
use crate::qr::{QrDecoder, QrEncoder};
use chrono::{DateTime, Local};
use image::{ImageError, ImageFormat};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedQr {
    /// Path the PNG was written to
    pub path: PathBuf,
    /// Symbol version chosen by auto-fit
    pub version: i16,
    /// Modules per side, excluding the border
    pub modules: u32,
    /// Side length of the square image in pixels
    pub image_size: u32,
    /// Whether the written file was decoded and matched the payload
    pub verified: bool,
}

/// Encodes payloads and writes them as PNG files
#[derive(Debug, Clone)]
pub struct QrGenerator {
    encoder: QrEncoder,
    naming: OutputNaming,
    verify: bool,
}

impl QrGenerator {
    /// Generator with the default QR parameters, writing to the working directory
    pub fn new() -> Self {
        Self::from_config(&QeasyConfig::default())
    }

    /// Generator built from a loaded configuration
    pub fn from_config(config: &QeasyConfig) -> Self {
        Self {
            encoder: QrEncoder::from_options(&config.qr),
            naming: OutputNaming::from_options(&config.output),
            verify: config.output.verify,
        }
    }

    /// Enable or disable read-back verification of the written file
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Encode `payload` and write it to `target`, or to a timestamped name when absent.
    pub fn generate(&self, payload: &str, target: Option<&str>) -> Result<GeneratedQr> {
        self.generate_at(payload, target, &Local::now())
    }

    /// Same as [`generate`](Self::generate) with an explicit timestamp for generated names.
    ///
    /// Nothing touches the filesystem until the payload has been encoded, so
    /// invalid input or an unencodable payload leaves no file or directory behind.
    pub fn generate_at(
        &self,
        payload: &str,
        target: Option<&str>,
        now: &DateTime<Local>,
    ) -> Result<GeneratedQr> {
        if payload.is_empty() {
            return Err(Error::InvalidInput("URL cannot be empty".to_string()));
        }

        let path = self.naming.resolve(target, now);
        debug!(path = %path.display(), bytes = payload.len(), "Generating QR code");

        let encoded = self.encoder.encode(payload)?;

        ensure_parent_dir(&path)?;
        encoded
            .image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| match e {
                ImageError::IoError(source) => Error::filesystem(&path, source),
                other => Error::from(other),
            })?;

        let verified = if self.verify {
            let decoded = QrDecoder::new().decode_file(&path)?;
            let actual = String::from_utf8_lossy(decoded.as_bytes()).into_owned();
            if actual != payload {
                return Err(Error::Verification {
                    expected: payload.to_string(),
                    actual,
                });
            }
            true
        } else {
            false
        };

        info!(
            path = %path.display(),
            version = encoded.version,
            verified,
            "QR code written"
        );

        Ok(GeneratedQr {
            image_size: encoded.image.width(),
            path,
            version: encoded.version,
            modules: encoded.modules,
            verified,
        })
    }
}

impl Default for QrGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the parent directory tree of `path`; existing directories are fine.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => fs::create_dir_all(dir).map_err(|e| Error::filesystem(dir, e)),
        None => Ok(()),
    }
}
