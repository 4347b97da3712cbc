//! Comment store — parameter name → ordered comments, kept in a JSON file.
//!
//! Every mutation reloads the file, appends, and rewrites it in full. The
//! read-modify-write is serialized by a mutex held by the store, and the new
//! content replaces the old file by rename. Other processes writing the
//! same file can still lose updates.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tempfile::NamedTempFile;
use tracing::debug;

/// Comments keyed by parameter name, in insertion order.
pub type Comments = IndexMap<String, Vec<String>>;

#[derive(Debug)]
pub struct CommentStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CommentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole store. A missing file is an empty store.
    pub fn load(&self) -> Result<Comments> {
        if !self.path.exists() {
            return Ok(Comments::new());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("malformed comment store {}", self.path.display()))
    }

    /// Append `text` to the comments for `name`, creating the key if needed.
    pub fn add(&self, name: &str, text: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut comments = self.load()?;
        comments
            .entry(name.to_string())
            .or_default()
            .push(text.to_string());
        self.save(&comments)?;

        debug!(name, path = %self.path.display(), "added comment");
        Ok(())
    }

    fn save(&self, comments: &Comments) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;

        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut tmp, formatter);
        comments
            .serialize(&mut ser)
            .context("failed to serialize comments")?;
        tmp.write_all(b"\n")?;

        tmp.persist(&self.path)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
