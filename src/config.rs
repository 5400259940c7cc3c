//! QEasy runtime configuration handling

use crate::error::{Error, Result};
use qrcode::EcLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QeasyConfig {
    /// QR symbol and rendering parameters
    pub qr: QrOptions,
    /// Output file naming and placement
    pub output: OutputOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl QeasyConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No qeasy.toml / qeasy.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["qeasy.toml", "qeasy.yaml", "qeasy.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("qeasy");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        let mut config: Self = match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            })?,
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            })?,
            other => {
                return Err(Error::Config(format!(
                    "Unsupported config format '{}', expected toml/yaml",
                    other
                )));
            }
        };

        config.qr.box_size = config.qr.box_size.max(1);
        Ok(config)
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.qr.apply_env_overrides();
        self.output.apply_env_overrides();
        self.logging.apply_env_overrides();
    }
}

/// QR symbol and raster parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QrOptions {
    /// Pixels per module edge
    pub box_size: u32,
    /// Light modules surrounding the symbol on each side
    pub border: u32,
    /// Redundancy level of the symbol
    pub error_correction: ErrorCorrection,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            box_size: 10,
            border: 4,
            error_correction: ErrorCorrection::Low,
        }
    }
}

impl QrOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(size) = env::var("QEASY_BOX_SIZE") {
            if let Ok(parsed) = size.parse::<u32>() {
                self.box_size = parsed.max(1);
            }
        }
        if let Ok(border) = env::var("QEASY_BORDER") {
            if let Ok(parsed) = border.parse::<u32>() {
                self.border = parsed;
            }
        }
        if let Ok(level) = env::var("QEASY_ERROR_CORRECTION") {
            if let Ok(parsed) = level.parse::<ErrorCorrection>() {
                self.error_correction = parsed;
            }
        }
    }
}

/// QR error-correction tiers, lowest redundancy first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// Roughly 7% of codewords recoverable
    Low,
    /// Roughly 15% of codewords recoverable
    Medium,
    /// Roughly 25% of codewords recoverable
    Quartile,
    /// Roughly 30% of codewords recoverable
    High,
}

impl ErrorCorrection {
    /// Parse a level name (`low`, `medium`, `quartile`, `high` or `L/M/Q/H`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "medium" | "m" => Some(Self::Medium),
            "quartile" | "q" => Some(Self::Quartile),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }

    /// Encoder level for this tier.
    pub fn ec_level(self) -> EcLevel {
        match self {
            Self::Low => EcLevel::L,
            Self::Medium => EcLevel::M,
            Self::Quartile => EcLevel::Q,
            Self::High => EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!(
                "Unsupported error correction level '{value}', expected low, medium, quartile or high"
            )
        })
    }
}

/// Output file naming and placement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputOptions {
    /// Directory joined in front of relative targets and generated names
    pub directory: Option<PathBuf>,
    /// Prefix of auto-generated file names
    pub prefix: String,
    /// Decode the written image and compare it to the payload
    pub verify: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            directory: None,
            prefix: "QEasy_QR_".to_string(),
            verify: false,
        }
    }
}

impl OutputOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var("QEASY_OUTPUT_DIR") {
            if dir.trim().is_empty() {
                self.directory = None;
            } else {
                self.directory = Some(PathBuf::from(dir));
            }
        }
        if let Ok(verify) = env::var("QEASY_VERIFY") {
            match verify.to_ascii_lowercase().as_str() {
                "1" | "true" | "on" => self.verify = true,
                "0" | "false" | "off" => self.verify = false,
                _ => {}
            }
        }
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QEASY_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stderr logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QEASY_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("QEASY_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("QEASY_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("QEASY_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::from_str(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}
