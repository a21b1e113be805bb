//! Marker data handed to the map view.

use crate::models::{ListingType, Property};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub property_id: String,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub price: i64,
    pub currency: String,
    pub listing_type: ListingType,
}

/// One marker per listing that has coordinates; the rest are skipped.
pub fn map_markers(properties: &[Property]) -> Vec<MapMarker> {
    properties
        .iter()
        .filter_map(|property| {
            let coordinates = property.coordinates?;
            Some(MapMarker {
                property_id: property.id.clone(),
                title: property.title.clone(),
                lat: coordinates.lat,
                lng: coordinates.lng,
                price: property.price,
                currency: property.currency.clone(),
                listing_type: property.listing_type,
            })
        })
        .collect()
}
