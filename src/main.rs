use anyhow::Context;
use property_finder::config::AppConfig;
use property_finder::favorites::{
    ComparisonSet, FavoritesStore, LocalProfileStore, ProfileStore, RemoteProfileStore,
};
use property_finder::map::map_markers;
use property_finder::mortgage::{self, MortgageInput};
use property_finder::providers::PropertyRepository;
use property_finder::search::{SearchController, SearchRequest};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Property Finder");
    info!("=================");

    let config = AppConfig::from_env();

    let repository = match &config.dataset {
        Some(path) => PropertyRepository::from_json_file(path).await?,
        None => PropertyRepository::sample(),
    };
    info!("{} listings available", repository.len());

    // Search described by a URL query string, e.g. "location=sandton&sort=price-asc"
    let query = std::env::args().nth(1).unwrap_or_default();
    let url = reqwest::Url::parse("http://localhost/search")
        .and_then(|base| base.join(&format!("?{}", query.trim_start_matches('?'))))
        .context("Failed to parse search query")?;
    let request = SearchRequest::from_url(&url);

    let controller = SearchController::with_settings(
        Arc::new(repository.clone()),
        config.page_size,
        config.search_delay,
    );

    let Some(results) = controller.run(request).await? else {
        warn!("Search was superseded before it completed");
        return Ok(());
    };

    info!(
        "\n✅ {} matching listings (page {} of {})\n",
        results.summary.total,
        results.page.page,
        results.page.total_pages.max(1)
    );

    for (i, property) in results.page.items.iter().enumerate() {
        println!("{}. {} ({} {})", i + 1, property.title, property.price, property.currency);
        println!(
            "   {} bed, {} bath, {} m²",
            property.bedrooms,
            property.bathrooms,
            property.size()
        );
        println!("   {}, {}", property.address.suburb, property.address.city);
        println!("   ID: {} [{}]", property.id, property.listing_type);
        println!("   Features: {}", property.features.join(", "));
        println!("   Agent: {} ({})", property.agent.name, property.agent.agency);
        println!();
    }

    for (property_type, count) in &results.summary.by_property_type {
        info!("   {}: {}", property_type, count);
    }
    info!("📍 {} listings can be shown on the map", map_markers(&results.page.items).len());

    if let Some(first) = results.page.items.first() {
        let input = MortgageInput {
            price: first.price as f64,
            deposit: first.price as f64 * 0.1,
            annual_rate: 11.75,
            term_years: 20,
        };
        match mortgage::calculate(&input) {
            Ok(quote) => info!(
                "🏦 {}: about {:.2} {}/month over 20 years with a 10% deposit",
                first.id, quote.monthly_payment, first.currency
            ),
            Err(error) => warn!("Could not estimate repayments: {}", error),
        }

        let mut compare = ComparisonSet::with_capacity(config.compare_limit);
        for property in &results.page.items {
            if compare.add(&property.id).is_err() {
                break;
            }
        }
        info!("⚖️  {} listings ready to compare", compare.resolve(repository.all()).len());
    }

    if let Some(user_id) = &config.user_id {
        let remote: Option<Arc<dyn ProfileStore>> = match &config.profile_api_url {
            Some(url) => Some(Arc::new(RemoteProfileStore::new(
                url,
                config.profile_api_key.clone(),
            )?)),
            None => None,
        };
        let local = Arc::new(LocalProfileStore::new(&config.data_dir));
        let mut favorites = FavoritesStore::new(remote, local);

        match favorites.sign_in(user_id).await {
            Ok(()) => info!(
                "❤️  {} saved listings ({})",
                favorites.len(),
                if favorites.is_database_available() { "synced" } else { "this device only" }
            ),
            Err(error) => warn!("Favorites unavailable: {}", error),
        }
    }

    // Save the result page like a search API response would return it
    let json = serde_json::to_string_pretty(&results)?;
    tokio::fs::write("search_results.json", json).await?;
    info!("💾 Saved results to search_results.json");

    Ok(())
}
