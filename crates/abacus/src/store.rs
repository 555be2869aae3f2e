//! Durable slots for session snapshots.
//!
//! A store holds one opaque JSON blob. Encoding lives in
//! [`crate::snapshot`]; stores only move bytes.

use crate::error::AbacusResult;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single key-value slot holding the latest snapshot
pub trait SnapshotStore {
    /// Reads the stored blob, `None` if nothing was saved yet
    fn load(&self) -> AbacusResult<Option<String>>;

    /// Replaces the stored blob
    fn save(&mut self, blob: &str) -> AbacusResult<()>;

    /// Removes the stored blob
    fn clear(&mut self) -> AbacusResult<()>;
}

/// In-memory slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> AbacusResult<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> AbacusResult<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }

    fn clear(&mut self) -> AbacusResult<()> {
        self.blob = None;
        Ok(())
    }
}

/// Slot backed by one JSON file.
///
/// Writes go to a sibling temp file first and are renamed into place, so
/// an interrupted save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for `path`; nothing is touched until the first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> AbacusResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, blob: &str) -> AbacusResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp = self.temp_path();
        fs::write(&temp, blob)?;
        fs::rename(&temp, &self.path)?;
        debug!(path = %self.path.display(), bytes = blob.len(), "snapshot saved");
        Ok(())
    }

    fn clear(&mut self) -> AbacusResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
