use crate::favorites::comparison::DEFAULT_COMPARE_LIMIT;
use crate::search::controller::{DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DELAY};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

const DEFAULT_DATA_DIR: &str = ".property-finder";

/// Runtime settings, read from `PROPERTY_*` environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the remote profile API; favorites stay on-device without it
    pub profile_api_url: Option<String>,
    pub profile_api_key: Option<String>,
    /// Root for the on-device favorites fallback
    pub data_dir: PathBuf,
    /// JSON listings file; the built-in sample is used when unset
    pub dataset: Option<PathBuf>,
    pub page_size: usize,
    pub search_delay: Duration,
    pub compare_limit: usize,
    /// Signed-in user handed over by the auth provider
    pub user_id: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile_api_url: None,
            profile_api_key: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            dataset: None,
            page_size: DEFAULT_PAGE_SIZE,
            search_delay: DEFAULT_SEARCH_DELAY,
            compare_limit: DEFAULT_COMPARE_LIMIT,
            user_id: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Malformed numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            profile_api_url: text("PROPERTY_PROFILE_API_URL"),
            profile_api_key: text("PROPERTY_PROFILE_API_KEY"),
            data_dir: text("PROPERTY_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            dataset: text("PROPERTY_DATASET").map(PathBuf::from),
            page_size: parse_or("PROPERTY_PAGE_SIZE", text("PROPERTY_PAGE_SIZE"), defaults.page_size)
                .max(1),
            search_delay: Duration::from_millis(parse_or(
                "PROPERTY_SEARCH_DELAY_MS",
                text("PROPERTY_SEARCH_DELAY_MS"),
                defaults.search_delay.as_millis() as u64,
            )),
            compare_limit: parse_or(
                "PROPERTY_COMPARE_LIMIT",
                text("PROPERTY_COMPARE_LIMIT"),
                defaults.compare_limit,
            )
            .max(1),
            user_id: text("PROPERTY_USER_ID"),
        }
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring malformed {}={:?}", key, raw);
            default
        }),
        None => default,
    }
}
