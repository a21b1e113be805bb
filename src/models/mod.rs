use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of property being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Townhouse,
    Flat,
    VacantLand,
    Commercial,
    Industrial,
    Farm,
    Office,
    Retail,
}

impl PropertyType {
    pub const ALL: [PropertyType; 10] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Townhouse,
        PropertyType::Flat,
        PropertyType::VacantLand,
        PropertyType::Commercial,
        PropertyType::Industrial,
        PropertyType::Farm,
        PropertyType::Office,
        PropertyType::Retail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Flat => "flat",
            PropertyType::VacantLand => "vacant_land",
            PropertyType::Commercial => "commercial",
            PropertyType::Industrial => "industrial",
            PropertyType::Farm => "farm",
            PropertyType::Office => "office",
            PropertyType::Retail => "retail",
        }
    }

    /// Lenient parse for values coming out of URLs and form fields.
    /// Accepts `vacant_land`, `vacant-land` and any casing.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|t| t.as_str() == normalized)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sale or rental status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    ForSale,
    ToRent,
    Sold,
    Rented,
}

impl ListingType {
    pub const ALL: [ListingType; 4] = [
        ListingType::ForSale,
        ListingType::ToRent,
        ListingType::Sold,
        ListingType::Rented,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::ForSale => "for_sale",
            ListingType::ToRent => "to_rent",
            ListingType::Sold => "sold",
            ListingType::Rented => "rented",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|t| t.as_str() == normalized)
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address of a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street: String,
    pub suburb: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyImage {
    pub url: String,
    pub alt: String,
    #[serde(default)]
    pub is_primary: bool,
    pub order: u32,
}

/// Listing agent, embedded in every property for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub agency: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub currency: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub garages: u32,
    #[serde(default)]
    pub square_meters: Option<u32>,
    #[serde(default)]
    pub erf_size: Option<u32>,
    pub address: Address,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    #[serde(default)]
    pub features: Vec<String>,
    pub agent: Agent,
    pub date_added: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub views: u64,
}

fn default_true() -> bool {
    true
}

impl Property {
    /// Floor area used for sorting and size bounds; unknown counts as 0.
    pub fn size(&self) -> u32 {
        self.square_meters.unwrap_or(0)
    }

    /// Image shown on cards: the primary image, else the first one.
    pub fn display_image(&self) -> Option<&PropertyImage> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features
            .iter()
            .any(|f| f.trim().eq_ignore_ascii_case(feature.trim()))
    }

    /// Sort images by `order` and keep at most one primary flag.
    pub fn normalize_images(&mut self) {
        self.images.sort_by_key(|image| image.order);
        let mut seen_primary = false;
        for image in &mut self.images {
            if image.is_primary {
                if seen_primary {
                    image.is_primary = false;
                }
                seen_primary = true;
            }
        }
    }
}
