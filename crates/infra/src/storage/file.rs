//! File-backed key-value store
//!
//! One JSON document per key under a data directory. Writes go through a
//! temporary file in the same directory and are renamed into place, so a
//! crash mid-write leaves the previous value intact.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use mailtriage_core::KeyValueStore;
use mailtriage_domain::{Result, TriageError};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::InfraError;

const APP_DIR_NAME: &str = "mailtriage";

/// Platform data directory for the client (e.g. `~/.local/share/mailtriage`).
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| TriageError::Config("no platform data directory available".into()))
}

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path backing `key`. Characters outside `[A-Za-z0-9._-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let sanitized: String =
            key.chars().map(|c| if is_safe_key_char(c) { c } else { '_' }).collect();
        self.dir.join(format!("{sanitized}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path_for(key);
        write_atomic(&path, value).map_err(TriageError::from)?;
        debug!(path = %path.display(), bytes = value.len(), "Persisted store entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}

fn is_safe_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn write_atomic(path: &Path, value: &[u8]) -> std::result::Result<(), InfraError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(value)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}
