//! Scratch directories for unit tests

use std::fs;
use std::path::{Path, PathBuf};

/// Unique temp directory removed on drop
pub(crate) struct ScratchDir(PathBuf);

impl ScratchDir {
    /// Path is reserved but not created, so tests can assert it stays absent.
    pub(crate) fn new(label: &str) -> Self {
        Self(std::env::temp_dir().join(format!("qeasy-{label}-{}", uuid::Uuid::new_v4())))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.0
    }

    /// Write `contents` to `name` inside the directory, creating it if needed.
    pub(crate) fn file(&self, name: &str, contents: &str) -> PathBuf {
        fs::create_dir_all(&self.0).expect("create scratch dir");
        let path = self.0.join(name);
        fs::write(&path, contents).expect("write scratch file");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}
