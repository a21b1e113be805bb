use crate::models::{ListingType, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Search criteria for narrowing the listing set.
/// Every field is optional; an absent field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free text matched against title and description
    pub query: Option<String>,
    /// Suburb or city
    pub location: Option<String>,
    pub listing_type: Option<ListingType>,
    /// Accepted property types; empty means any
    pub property_types: BTreeSet<PropertyType>,
    /// Minimum price (inclusive)
    pub min_price: Option<i64>,
    /// Maximum price (inclusive)
    pub max_price: Option<i64>,
    /// At least this many bedrooms
    pub bedrooms: Option<u32>,
    /// At least this many bathrooms
    pub bathrooms: Option<u32>,
    /// Minimum size in square meters
    pub min_square_meters: Option<u32>,
    /// Maximum size in square meters
    pub max_square_meters: Option<u32>,
    /// Features that must all be present
    pub features: BTreeSet<String>,
}

impl SearchFilters {
    /// Trimmed, non-blank free-text query
    pub fn query_text(&self) -> Option<&str> {
        non_blank(self.query.as_deref())
    }

    /// Trimmed, non-blank location
    pub fn location_text(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    /// Trimmed, non-blank feature names
    pub fn required_features(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
    }

    /// Midpoint of the price window, only when both bounds are set.
    pub fn price_midpoint(&self) -> Option<i64> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => Some(((i128::from(min) + i128::from(max)) / 2) as i64),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Result ordering offered by the search page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    PriceAsc,
    PriceDesc,
    SizeAsc,
    SizeDesc,
    Relevance,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::SizeAsc => "size-asc",
            SortKey::SizeDesc => "size-desc",
            SortKey::Relevance => "relevance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase().replace('_', "-");
        [
            SortKey::DateDesc,
            SortKey::DateAsc,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::SizeAsc,
            SortKey::SizeDesc,
            SortKey::Relevance,
        ]
        .into_iter()
        .find(|key| key.as_str() == value)
    }
}

/// Everything a search URL carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub filters: SearchFilters,
    pub sort: SortKey,
    /// 1-indexed page
    pub page: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            filters: SearchFilters::default(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl SearchRequest {
    /// Build a request from URL query parameters.
    ///
    /// Unknown keys are ignored. Malformed numbers, unknown enum values and
    /// blank strings are treated as if the parameter were absent.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::default();
        let filters = &mut request.filters;

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "q" | "query" => filters.query = Some(value.to_string()),
                "location" => filters.location = Some(value.to_string()),
                "listingType" | "listing_type" => filters.listing_type = ListingType::parse(value),
                "propertyType" | "property_type" | "type" => {
                    filters
                        .property_types
                        .extend(split_list(value).filter_map(PropertyType::parse));
                }
                "minPrice" | "min_price" => filters.min_price = parse_amount(value),
                "maxPrice" | "max_price" => filters.max_price = parse_amount(value),
                "bedrooms" | "beds" => filters.bedrooms = parse_count(value),
                "bathrooms" | "baths" => filters.bathrooms = parse_count(value),
                "minSize" | "minSquareMeters" | "min_square_meters" => {
                    filters.min_square_meters = parse_count(value)
                }
                "maxSize" | "maxSquareMeters" | "max_square_meters" => {
                    filters.max_square_meters = parse_count(value)
                }
                "features" | "feature" => {
                    filters
                        .features
                        .extend(split_list(value).map(str::to_string));
                }
                "sort" | "sortBy" => request.sort = SortKey::parse(value).unwrap_or_default(),
                "page" => {
                    request.page = parse_count(value)
                        .map(|p| p as usize)
                        .filter(|p| *p >= 1)
                        .unwrap_or(1)
                }
                _ => {}
            }
        }

        request
    }

    /// Build a request from a full URL such as `/search?location=sandton`
    pub fn from_url(url: &reqwest::Url) -> Self {
        Self::from_query_pairs(url.query_pairs())
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a money amount typed into a form. Accepts `3000000`, `3 000 000`,
/// `3,000,000` and a leading `R`; anything else is `None`.
pub fn parse_amount(value: &str) -> Option<i64> {
    if value.contains('-') {
        return None;
    }
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '_')
        .collect();
    let digits = digits.trim_start_matches(|c: char| c == 'R' || c == 'r');
    let amount: f64 = digits.parse().ok()?;
    if !amount.is_finite() || amount > i64::MAX as f64 {
        return None;
    }
    Some(amount.round() as i64)
}

/// Parse a non-negative count such as bedrooms or square meters.
pub fn parse_count(value: &str) -> Option<u32> {
    let amount = parse_amount(value)?;
    u32::try_from(amount).ok()
}
