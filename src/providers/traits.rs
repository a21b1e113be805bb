use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all property data sources
/// The bundled dataset implements it today; a remote listings API can slot in later
#[async_trait]
pub trait PropertyProvider: Send + Sync {
    /// Fetch every listing the source knows about
    async fn list(&self) -> Result<Vec<Property>>;

    /// Get the name of the data source
    fn source_name(&self) -> &'static str;
}
