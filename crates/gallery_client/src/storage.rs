use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use thiserror::Error;

/// Fixed key the persisted order lives under, matching the key the rendered
/// page writes from its drag-end handler.
pub const ORDER_STORAGE_KEY: &str = "gallery.image-order";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("order store io error: {0}")]
    Io(#[from] io::Error),
    #[error("persisted order is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Local per-browser storage boundary: a single slot holding a JSON array of
/// URL strings, fully overwritten on every save.
pub trait OrderStore {
    fn load(&self) -> Result<Option<Vec<String>>, StoreError>;
    fn save(&mut self, order: &[String]) -> Result<(), StoreError>;
}

/// Single-slot in-memory store, the localStorage stand-in for tests and the
/// headless harness. Holds the raw JSON text so corrupt blobs can be seeded.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    slot: Option<String>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl OrderStore for MemoryOrderStore {
    fn load(&self) -> Result<Option<Vec<String>>, StoreError> {
        match &self.slot {
            None => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        }
    }

    fn save(&mut self, order: &[String]) -> Result<(), StoreError> {
        self.slot = Some(serde_json::to_string(order)?);
        Ok(())
    }
}

/// File-backed store: the persisted order survives across harness runs the
/// way localStorage survives across browser sessions. Writes go through a
/// temp file and a rename so a crash never leaves a truncated blob.
#[derive(Debug)]
pub struct FileOrderStore {
    path: PathBuf,
}

impl FileOrderStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OrderStore for FileOrderStore {
    fn load(&self) -> Result<Option<Vec<String>>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&mut self, order: &[String]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer(&mut tmp, order)?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}
