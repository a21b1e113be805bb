use crate::favorites::traits::{validate_user_id, ProfileStore, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct FavoritesDocument {
    favorites: Vec<String>,
    updated_at: DateTime<Utc>,
}

/// Device-scoped fallback: one JSON file per user under `root/favorites/`
#[derive(Debug, Clone)]
pub struct LocalProfileStore {
    root: PathBuf,
}

impl LocalProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, user_id: &str) -> Result<PathBuf, StoreError> {
        validate_user_id(user_id)?;
        Ok(self.root.join("favorites").join(format!("{user_id}.json")))
    }

    async fn ensure_parent_dir(path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for LocalProfileStore {
    async fn load_favorites(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        let path = self.path_for(user_id)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!("No local favorites for {} yet", user_id);
                return Ok(Vec::new());
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let document: FavoritesDocument = serde_json::from_slice(&bytes)?;
        Ok(document.favorites)
    }

    async fn save_favorites(&self, user_id: &str, favorites: &[String]) -> Result<(), StoreError> {
        let path = self.path_for(user_id)?;
        Self::ensure_parent_dir(&path).await?;

        let document = FavoritesDocument {
            favorites: favorites.to_vec(),
            updated_at: Utc::now(),
        };
        let serialized = serde_json::to_vec_pretty(&document)?;
        tokio::fs::write(&path, serialized)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        debug!("Saved {} local favorites to {}", favorites.len(), path.display());
        Ok(())
    }

    fn store_name(&self) -> &'static str {
        "local"
    }
}
