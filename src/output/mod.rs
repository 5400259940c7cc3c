//! Output path resolution and result presentation

use crate::config::OutputOptions;
use crate::error::Result;
use crate::generator::GeneratedQr;
use chrono::{DateTime, Local};
use serde_json::{Value, json};
use std::path::PathBuf;

/// Extension of every file the generator writes
pub const IMAGE_EXTENSION: &str = "png";

/// Turns an optional user target into the path the image is written to
#[derive(Debug, Clone)]
pub struct OutputNaming {
    directory: Option<PathBuf>,
    prefix: String,
}

impl OutputNaming {
    /// Naming rules from configured output options
    pub fn from_options(options: &OutputOptions) -> Self {
        Self {
            directory: options.directory.clone(),
            prefix: options.prefix.clone(),
        }
    }

    /// Resolve `target` against the naming rules.
    ///
    /// An absent or empty target becomes `<prefix><YYYYMMDD_HHMMSS>.png`
    /// stamped with `now`; a target without a `.png` extension gets one
    /// appended. Relative results are placed under the configured directory.
    pub fn resolve(&self, target: Option<&str>, now: &DateTime<Local>) -> PathBuf {
        let name = match target.filter(|t| !t.is_empty()) {
            Some(target) if has_image_extension(target) => target.to_string(),
            Some(target) => format!("{target}.{IMAGE_EXTENSION}"),
            None => format!(
                "{}{}.{IMAGE_EXTENSION}",
                self.prefix,
                now.format("%Y%m%d_%H%M%S")
            ),
        };

        match &self.directory {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self::from_options(&OutputOptions::default())
    }
}

/// Suffix match on the raw target, so dot-files like `.png` count as named images.
fn has_image_extension(target: &str) -> bool {
    let suffix = format!(".{IMAGE_EXTENSION}");
    target
        .len()
        .checked_sub(suffix.len())
        .and_then(|start| target.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(&suffix))
}

/// Combined structured and human-readable representation of a generation result
#[derive(Debug, Clone)]
pub struct RenderedResult {
    /// Structured JSON representation for `--json`
    pub json: Value,
    /// Human-readable lines for terminal presentation
    pub human: Vec<String>,
}

/// Render a successful generation into both JSON and human-readable forms.
pub fn render_generated(generated: &GeneratedQr) -> Result<RenderedResult> {
    let mut json = serde_json::to_value(generated)?;
    if let Some(obj) = json.as_object_mut() {
        obj.insert("success".to_string(), Value::Bool(true));
    }

    let mut human = vec![format!("QR code saved to {}", generated.path.display())];
    if generated.verified {
        human.push("  Verified: decodes back to the original payload".to_string());
    }

    Ok(RenderedResult { json, human })
}

/// Structured JSON representation of a failure.
pub fn render_error(message: &str, exit_code: u8) -> Value {
    json!({
        "success": false,
        "error": message,
        "exit_code": exit_code,
    })
}
