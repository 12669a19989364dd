use crate::models::AdapterError;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Opaque key-value byte store the snippet store reads from and writes to.
///
/// Last write wins; there are no transactions.
pub trait PersistenceAdapter {
    /// Returns the bytes stored under `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), AdapterError>;
}

impl<A: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<A> {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), AdapterError> {
        (**self).set(key, bytes)
    }
}

fn check_quota(quota: Option<usize>, requested: usize) -> Result<(), AdapterError> {
    match quota {
        Some(limit) if requested > limit => Err(AdapterError::QuotaExceeded { limit, requested }),
        _ => Ok(()),
    }
}

/// In-process storage, optionally capped at a byte quota per value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, Vec<u8>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Seeds `key` with raw bytes, bypassing the quota.
    pub fn insert_raw(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), bytes.into());
    }

    pub fn set_quota(&mut self, quota: Option<usize>) {
        self.quota = quota;
    }
}

impl PersistenceAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), AdapterError> {
        check_quota(self.quota, bytes.len())?;
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Storage backed by one file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
    quota: Option<usize>,
}

impl FileStorage {
    /// Opens storage in the platform data directory (`<data_dir>/snipcard`).
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .context("Failed to get data directory")?
            .join("snipcard");
        Self::at(data_dir)
    }

    /// Opens storage rooted at `data_dir`, creating it if it doesn't exist.
    pub fn at(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create data directory {}", data_dir.display())
        })?;

        Ok(Self {
            data_dir,
            quota: None,
        })
    }

    pub fn with_quota(mut self, quota: Option<usize>) -> Self {
        self.quota = quota;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl PersistenceAdapter for FileStorage {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable storage file, treating as absent");
                None
            }
        }
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), AdapterError> {
        check_quota(self.quota, bytes.len())?;
        fs::write(self.path_for(key), bytes)?;
        Ok(())
    }
}
