use crate::favorites::traits::{validate_user_id, ProfileStore, StoreError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
struct FavoritesBody {
    favorites: Vec<String>,
}

/// Remote per-user profile API
///
/// `GET`/`PUT {base}/profiles/{user}/favorites` with a `{"favorites": [...]}`
/// body, and `GET {base}/health` for reachability.
pub struct RemoteProfileStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RemoteProfileStore {
    /// Create a client for the profile API at `base_url`
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("property-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn favorites_url(&self, user_id: &str) -> Result<String, StoreError> {
        validate_user_id(user_id)?;
        Ok(format!("{}/profiles/{}/favorites", self.base_url, user_id))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl ProfileStore for RemoteProfileStore {
    async fn load_favorites(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        let url = self.favorites_url(user_id)?;
        debug!("Fetching favorites: {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            warn!("Profile store returned status: {}", response.status());
            return Err(StoreError::Status(response.status()));
        }

        let body: FavoritesBody = response.json().await?;
        Ok(body.favorites)
    }

    async fn save_favorites(&self, user_id: &str, favorites: &[String]) -> Result<(), StoreError> {
        let url = self.favorites_url(user_id)?;
        let body = FavoritesBody {
            favorites: favorites.to_vec(),
        };

        let response = self
            .authorize(self.client.put(&url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Profile store rejected update: {}", response.status());
            return Err(StoreError::Status(response.status()));
        }

        debug!("Saved {} favorites for {}", favorites.len(), user_id);
        Ok(())
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.authorize(self.client.get(&url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                debug!("Profile store health check failed: {}", error);
                false
            }
        }
    }

    fn store_name(&self) -> &'static str {
        "remote"
    }
}
