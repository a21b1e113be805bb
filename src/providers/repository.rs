use crate::data::sample_properties;
use crate::models::Property;
use crate::providers::traits::PropertyProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// In-memory listing store backing search, detail pages and agent profiles
#[derive(Debug, Clone, Default)]
pub struct PropertyRepository {
    properties: Vec<Property>,
}

impl PropertyRepository {
    /// Build a repository, normalising images and dropping duplicate ids.
    /// The first record with a given id wins.
    pub fn new(properties: Vec<Property>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(properties.len());

        for mut property in properties {
            if !seen.insert(property.id.clone()) {
                warn!("Dropping duplicate listing id {}", property.id);
                continue;
            }
            property.normalize_images();
            kept.push(property);
        }

        Self { properties: kept }
    }

    /// Repository seeded with the built-in sample listings
    pub fn sample() -> Self {
        info!("📋 Loading built-in sample listings");
        Self::new(sample_properties())
    }

    /// Load listings from a JSON array on disk
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading dataset from {}", path.display());

        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        let properties: Vec<Property> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse dataset {}", path.display()))?;

        info!("Loaded {} listings from {}", properties.len(), path.display());
        Ok(Self::new(properties))
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Listing detail lookup
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Listings visible to buyers and tenants
    pub fn active(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_active).collect()
    }

    /// Active listings flagged for the home page carousel
    pub fn featured(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.is_active && p.is_featured)
            .collect()
    }

    /// Active listings handled by one agent, for the agent profile page
    pub fn by_agent(&self, agent_id: &str) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.is_active && p.agent.id == agent_id)
            .collect()
    }

    /// Bump the in-memory view counter. Not persisted anywhere.
    pub fn record_view(&mut self, id: &str) -> Option<u64> {
        let property = self.properties.iter_mut().find(|p| p.id == id)?;
        property.views += 1;
        Some(property.views)
    }
}

#[async_trait]
impl PropertyProvider for PropertyRepository {
    async fn list(&self) -> Result<Vec<Property>> {
        Ok(self.properties.clone())
    }

    fn source_name(&self) -> &'static str {
        "in-memory"
    }
}
