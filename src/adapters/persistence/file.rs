//! JSON file persistence backend
//!
//! Stores the snapshot document as pretty-printed JSON at a fixed path.
//! The same machinery backs explicit backup export/import: a backup file
//! is simply the snapshot document written somewhere else.

use crate::adapters::persistence::snapshot::StateSnapshot;
use crate::adapters::persistence::traits::StateStore;
use crate::domain::{HospitalError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-backed state store
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Creates a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a snapshot document to an arbitrary path
    ///
    /// Used for explicit backup export; the regular save path goes
    /// through [`StateStore::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn export_to(snapshot: &StateSnapshot, path: impl AsRef<Path>) -> Result<()> {
        let document = snapshot.to_json()?;
        write_document(path.as_ref(), &document).await
    }

    /// Reads and validates a snapshot document from an arbitrary path
    ///
    /// Used for explicit backup import. A missing file is an error here,
    /// unlike the regular load path.
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read, `Restore` when the document is
    /// malformed or missing its version tag.
    pub async fn import_from(path: impl AsRef<Path>) -> Result<StateSnapshot> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).await.map_err(|e| {
            HospitalError::Io(format!("Failed to read backup {}: {e}", path.display()))
        })?;
        StateSnapshot::from_json(&document)
    }
}

async fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|e| {
                HospitalError::Io(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    fs::write(path, document)
        .await
        .map_err(|e| HospitalError::Io(format!("Failed to write {}: {e}", path.display())))
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn save(&self, snapshot: &StateSnapshot) -> Result<()> {
        let document = snapshot.to_json()?;
        write_document(&self.path, &document).await?;
        tracing::debug!(path = %self.path.display(), "state snapshot saved");
        Ok(())
    }

    async fn load(&self) -> Result<Option<StateSnapshot>> {
        match fs::read_to_string(&self.path).await {
            Ok(document) => Ok(Some(StateSnapshot::from_json(&document)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HospitalError::Io(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }
}
