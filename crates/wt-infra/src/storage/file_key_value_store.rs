//! File-based key/value store
//!
//! This module provides a file-based implementation of the
//! KeyValueStorePort, persisting all keys as a single JSON object in a
//! local file under the application data directory.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use wt_core::ports::KeyValueStorePort;

pub const DEFAULT_STORE_FILE: &str = ".walkthrough_store";

/// Typed storage failures; converted into `anyhow::Error` at the port
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct FileKeyValueStore {
    store_file_path: PathBuf,
    /// Serializes read-modify-write cycles between concurrent writers.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store with a custom file path.
    pub fn new(store_file_path: PathBuf) -> Self {
        Self {
            store_file_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store with base dir and filename.
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self::new(base_dir.join(filename.into()))
    }

    /// Create a store with defaults.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STORE_FILE))
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.store_file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|source| StorageError::Io {
                path: self.store_file_path.clone(),
                source,
            })?;
        }
        Ok(())
    }

    async fn read_map(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.store_file_path.exists() {
            return Ok(HashMap::new());
        }

        let content =
            fs::read_to_string(&self.store_file_path)
                .await
                .map_err(|source| StorageError::Io {
                    path: self.store_file_path.clone(),
                    source,
                })?;

        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.store_file_path.clone(),
            source,
        })
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let io_err = |source| StorageError::Io {
            path: self.store_file_path.clone(),
            source,
        };

        let json = serde_json::to_string_pretty(map).map_err(|source| StorageError::Corrupt {
            path: self.store_file_path.clone(),
            source,
        })?;

        let mut file = fs::File::create(&self.store_file_path).await.map_err(io_err)?;
        file.write_all(json.as_bytes()).await.map_err(io_err)?;
        file.sync_all().await.map_err(io_err)?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let map = self.read_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await?;
        Ok(())
    }

    async fn multi_get(&self, keys: &[&str]) -> anyhow::Result<Vec<Option<String>>> {
        let map = self.read_map().await?;
        Ok(keys.iter().map(|key| map.get(*key).cloned()).collect())
    }

    async fn multi_remove(&self, keys: &[&str]) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        let mut changed = false;
        for key in keys {
            changed |= map.remove(*key).is_some();
        }
        if changed {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}
