use crate::favorites::traits::{ProfileStore, StoreError};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("sign in to save favorites")]
    SignInRequired,

    #[error("could not load favorites from the {store} store: {source}")]
    Load {
        store: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("could not save favorites to the {store} store: {source}")]
    Save {
        store: &'static str,
        #[source]
        source: StoreError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesState {
    /// No user; the UI should prompt for sign-in
    Unauthenticated,
    Loading,
    Ready,
    /// Last load or reconcile failed; the previous set is retained
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Remote,
    Local,
}

/// A signed-in user's saved listings.
///
/// Owned by the session: created on sign-in, torn down on sign-out.
/// Mutations apply to the in-memory set first and are then written through
/// to the remote store, or to the device store while the remote is down.
pub struct FavoritesStore {
    remote: Option<Arc<dyn ProfileStore>>,
    local: Arc<dyn ProfileStore>,
    user_id: Option<String>,
    state: FavoritesState,
    favorites: BTreeSet<String>,
    backend: Backend,
}

impl FavoritesStore {
    pub fn new(remote: Option<Arc<dyn ProfileStore>>, local: Arc<dyn ProfileStore>) -> Self {
        Self {
            remote,
            local,
            user_id: None,
            state: FavoritesState::Unauthenticated,
            favorites: BTreeSet::new(),
            backend: Backend::Local,
        }
    }

    pub fn state(&self) -> &FavoritesState {
        &self.state
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// True while favorites are synced to the remote profile store.
    /// False means they only live on this device.
    pub fn is_database_available(&self) -> bool {
        self.backend == Backend::Remote
    }

    pub fn has(&self, property_id: &str) -> bool {
        self.favorites.contains(property_id)
    }

    pub fn list(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Start a session for `user_id` and load their favorites.
    pub async fn sign_in(&mut self, user_id: &str) -> Result<(), FavoritesError> {
        if self.user_id.as_deref() != Some(user_id) {
            self.favorites.clear();
        }
        info!("Favorites session started for {}", user_id);
        self.user_id = Some(user_id.to_string());
        self.refresh().await
    }

    /// End the session and forget the in-memory set.
    pub fn sign_out(&mut self) {
        if let Some(user_id) = self.user_id.take() {
            info!("Favorites session ended for {}", user_id);
        }
        self.favorites.clear();
        self.backend = Backend::Local;
        self.state = FavoritesState::Unauthenticated;
    }

    fn store(&self) -> &Arc<dyn ProfileStore> {
        match (self.backend, &self.remote) {
            (Backend::Remote, Some(remote)) => remote,
            _ => &self.local,
        }
    }

    async fn select_backend(&mut self) {
        let Some(remote) = self.remote.clone() else {
            self.backend = Backend::Local;
            return;
        };

        self.backend = if remote.is_available().await {
            Backend::Remote
        } else {
            warn!(
                "{} profile store unreachable, keeping favorites on this device",
                remote.store_name()
            );
            Backend::Local
        };
    }

    /// Reload the authoritative set from the backend.
    ///
    /// On failure the previous in-memory set is kept and the state becomes
    /// [`FavoritesState::Error`].
    pub async fn refresh(&mut self) -> Result<(), FavoritesError> {
        let Some(user_id) = self.user_id.clone() else {
            self.state = FavoritesState::Unauthenticated;
            return Err(FavoritesError::SignInRequired);
        };

        self.state = FavoritesState::Loading;
        self.select_backend().await;
        let store = Arc::clone(self.store());

        match store.load_favorites(&user_id).await {
            Ok(ids) => {
                self.favorites = ids.into_iter().collect();
                self.state = FavoritesState::Ready;
                debug!(
                    "Loaded {} favorites from the {} store",
                    self.favorites.len(),
                    store.store_name()
                );
                Ok(())
            }
            Err(source) => {
                warn!("Failed to load favorites: {}", source);
                self.state = FavoritesState::Error(source.to_string());
                Err(FavoritesError::Load {
                    store: store.store_name(),
                    source,
                })
            }
        }
    }

    fn require_user(&self) -> Result<String, FavoritesError> {
        self.user_id.clone().ok_or(FavoritesError::SignInRequired)
    }

    /// Save a listing. Returns `false` if it was already saved.
    pub async fn add(&mut self, property_id: &str) -> Result<bool, FavoritesError> {
        let user_id = self.require_user()?;
        if !self.favorites.insert(property_id.to_string()) {
            return Ok(false);
        }
        self.persist(&user_id).await?;
        Ok(true)
    }

    /// Unsave a listing. Returns `false` if it was not saved.
    pub async fn remove(&mut self, property_id: &str) -> Result<bool, FavoritesError> {
        let user_id = self.require_user()?;
        if !self.favorites.remove(property_id) {
            return Ok(false);
        }
        self.persist(&user_id).await?;
        Ok(true)
    }

    /// Heart button: add when absent, remove when present.
    /// Returns whether the listing is saved afterwards.
    pub async fn toggle(&mut self, property_id: &str) -> Result<bool, FavoritesError> {
        if self.has(property_id) {
            self.remove(property_id).await?;
            Ok(false)
        } else {
            self.add(property_id).await?;
            Ok(true)
        }
    }

    /// Drop every saved listing. Confirmation happens in the UI.
    pub async fn clear(&mut self) -> Result<(), FavoritesError> {
        let user_id = self.require_user()?;
        self.favorites.clear();
        self.persist(&user_id).await
    }

    /// Write the set through.
    ///
    /// If the remote store has gone away since the last refresh, switch to
    /// the device store and write there instead. Any other failed write
    /// re-reads the backend so the in-memory set matches what is stored.
    async fn persist(&mut self, user_id: &str) -> Result<(), FavoritesError> {
        let ids: Vec<String> = self.favorites.iter().cloned().collect();
        let mut store = Arc::clone(self.store());

        let mut source = match store.save_favorites(user_id, &ids).await {
            Ok(()) => {
                self.state = FavoritesState::Ready;
                return Ok(());
            }
            Err(source) => source,
        };

        if self.backend == Backend::Remote && source.is_connectivity() {
            self.select_backend().await;
            if self.backend == Backend::Local {
                store = Arc::clone(&self.local);
                match store.save_favorites(user_id, &ids).await {
                    Ok(()) => {
                        warn!("Saved favorites on this device only: {}", source);
                        self.state = FavoritesState::Ready;
                        return Ok(());
                    }
                    Err(local_error) => source = local_error,
                }
            }
        }

        warn!("Failed to save favorites, reconciling: {}", source);
        match store.load_favorites(user_id).await {
            Ok(authoritative) => {
                self.favorites = authoritative.into_iter().collect();
                self.state = FavoritesState::Ready;
            }
            Err(reload_error) => {
                warn!("Reconcile failed, keeping local changes: {}", reload_error);
                self.state = FavoritesState::Error(reload_error.to_string());
            }
        }

        Err(FavoritesError::Save {
            store: store.store_name(),
            source,
        })
    }
}
