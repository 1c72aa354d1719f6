use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Office;

/// Errors that can occur while persisting favorites
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Favorite office ids
///
/// Owns the only copy of the list. When a path is configured the list is kept in
/// sync with a JSON array on disk; otherwise it lives for the process lifetime.
pub struct FavoritesStore {
    path: Option<PathBuf>,
    ids: RwLock<Vec<String>>,
}

impl FavoritesStore {
    /// Store that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            ids: RwLock::new(Vec::new()),
        }
    }

    /// Open a file-backed store, reading whatever the file already holds
    pub async fn open<P: AsRef<Path>>(path: P) -> Self {
        let store = Self {
            path: Some(path.as_ref().to_path_buf()),
            ids: RwLock::new(Vec::new()),
        };
        store.load().await;
        store
    }

    /// Reload from disk
    ///
    /// A missing or unreadable file loads as an empty list.
    pub async fn load(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let ids = match read_ids(path).await {
            Ok(ids) => ids,
            Err(FavoritesError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites from {}: {}", path.display(), e);
                Vec::new()
            }
        };

        tracing::debug!("Loaded {} favorites", ids.len());
        *self.ids.write().await = ids;
    }

    /// Write the current list to disk
    pub async fn save(&self) -> Result<(), FavoritesError> {
        let ids = self.ids.write().await;
        self.persist(&ids).await
    }

    /// Add an id; adding one that is already present changes nothing
    pub async fn add(&self, id: &str) -> Result<(), FavoritesError> {
        self.update(|ids| {
            if !ids.iter().any(|existing| existing == id) {
                ids.push(id.to_string());
            }
        })
        .await
    }

    pub async fn remove(&self, id: &str) -> Result<(), FavoritesError> {
        self.update(|ids| ids.retain(|existing| existing != id)).await
    }

    /// Flip membership and return the new state
    pub async fn toggle(&self, id: &str) -> Result<bool, FavoritesError> {
        self.update(|ids| match ids.iter().position(|existing| existing == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        })
        .await
    }

    /// Apply `change` to a copy of the list and commit it once it is on disk
    ///
    /// The write lock is held across the file write, so saves never interleave and
    /// a failed save leaves the list untouched.
    async fn update<T>(&self, change: impl FnOnce(&mut Vec<String>) -> T) -> Result<T, FavoritesError> {
        let mut ids = self.ids.write().await;
        let mut next = ids.clone();
        let outcome = change(&mut next);

        if next != *ids {
            self.persist(&next).await?;
            *ids = next;
        }
        Ok(outcome)
    }

    /// Replace the file with `ids` through a sibling temp file and a rename
    async fn persist(&self, ids: &[String]) -> Result<(), FavoritesError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let json = serde_json::to_vec(ids)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, path).await?;
        tracing::trace!("Saved {} favorites to {}", ids.len(), path.display());
        Ok(())
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.ids.read().await.iter().any(|existing| existing == id)
    }

    /// Ids in the order they were added
    pub async fn ids(&self) -> Vec<String> {
        self.ids.read().await.clone()
    }

    /// Favorite offices in catalog order
    pub async fn favorite_offices(&self, catalog: &[Office]) -> Vec<Office> {
        let ids = self.ids.read().await;
        catalog
            .iter()
            .filter(|office| ids.contains(&office.id))
            .cloned()
            .collect()
    }
}

async fn read_ids(path: &Path) -> Result<Vec<String>, FavoritesError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
