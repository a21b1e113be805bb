use crate::favorites::traits::{ProfileStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Process-local profile store. Stands in for the remote API in demos and
/// tests; `set_available(false)` simulates losing the connection.
#[derive(Debug)]
pub struct MemoryProfileStore {
    data: Mutex<HashMap<String, Vec<String>>>,
    available: AtomicBool,
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryProfileStore {
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load_favorites(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        self.check()?;
        let data = self.data.lock().await;
        Ok(data.get(user_id).cloned().unwrap_or_default())
    }

    async fn save_favorites(&self, user_id: &str, favorites: &[String]) -> Result<(), StoreError> {
        self.check()?;
        let mut data = self.data.lock().await;
        data.insert(user_id.to_string(), favorites.to_vec());
        Ok(())
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn store_name(&self) -> &'static str {
        "memory"
    }
}
