//! Temporary directories populated with fixture documents.
//!
//! # Examples
//!
//! ```
//! use test_helpers::fixtures::DocumentDir;
//!
//! let dir = DocumentDir::new()?;
//! let base = dir.write("base.json", r#"{"port": 7890}"#)?;
//! assert!(base.as_std_path().is_file());
//! # Ok::<_, anyhow::Error>(())
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

/// Temporary directory that is removed when dropped.
#[derive(Debug)]
pub struct DocumentDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DocumentDir {
    /// Creates an empty fixture directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create fixture directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("fixture directory is not UTF-8: {}", path.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Root of the fixture directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Path of `name` inside the directory, whether or not it exists.
    #[must_use]
    pub fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Writes `contents` verbatim to `name` and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, contents).with_context(|| format!("write fixture {path}"))?;
        Ok(path)
    }

    /// Writes `value` as pretty JSON to `name` and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn write_json(&self, name: &str, value: &Value) -> Result<Utf8PathBuf> {
        let text = serde_json::to_string_pretty(value)?;
        self.write(name, &text)
    }

    /// Reads `name` back as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        std::fs::read_to_string(&path).with_context(|| format!("read fixture {path}"))
    }
}
