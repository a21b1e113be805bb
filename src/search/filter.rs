use crate::models::Property;
use crate::search::types::SearchFilters;

/// Return the listings that satisfy every criterion present in `criteria`.
///
/// Absent criteria impose no constraint. The output keeps input order, but
/// callers should sort explicitly.
pub fn filter_properties(all: &[Property], criteria: &SearchFilters) -> Vec<Property> {
    all.iter()
        .filter(|property| matches_filters(property, criteria))
        .cloned()
        .collect()
}

pub fn matches_filters(property: &Property, criteria: &SearchFilters) -> bool {
    matches_query(property, criteria)
        && matches_location(property, criteria)
        && matches_listing_type(property, criteria)
        && matches_property_type(property, criteria)
        && matches_price(property, criteria)
        && matches_rooms(property, criteria)
        && matches_size(property, criteria)
        && matches_features(property, criteria)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_query(property: &Property, criteria: &SearchFilters) -> bool {
    match criteria.query_text() {
        Some(query) => {
            contains_ignore_case(&property.title, query)
                || contains_ignore_case(&property.description, query)
        }
        None => true,
    }
}

/// Location text as matched by the location box: suburb then city.
pub fn location_haystack(property: &Property) -> String {
    format!("{} {}", property.address.suburb, property.address.city)
}

fn matches_location(property: &Property, criteria: &SearchFilters) -> bool {
    match criteria.location_text() {
        Some(location) => contains_ignore_case(&location_haystack(property), location),
        None => true,
    }
}

fn matches_listing_type(property: &Property, criteria: &SearchFilters) -> bool {
    criteria
        .listing_type
        .map_or(true, |listing_type| property.listing_type == listing_type)
}

fn matches_property_type(property: &Property, criteria: &SearchFilters) -> bool {
    criteria.property_types.is_empty() || criteria.property_types.contains(&property.property_type)
}

fn matches_price(property: &Property, criteria: &SearchFilters) -> bool {
    criteria.min_price.map_or(true, |min| property.price >= min)
        && criteria.max_price.map_or(true, |max| property.price <= max)
}

fn matches_rooms(property: &Property, criteria: &SearchFilters) -> bool {
    criteria.bedrooms.map_or(true, |beds| property.bedrooms >= beds)
        && criteria.bathrooms.map_or(true, |baths| property.bathrooms >= baths)
}

fn matches_size(property: &Property, criteria: &SearchFilters) -> bool {
    let size = property.size();
    criteria.min_square_meters.map_or(true, |min| size >= min)
        && criteria.max_square_meters.map_or(true, |max| size <= max)
}

fn matches_features(property: &Property, criteria: &SearchFilters) -> bool {
    criteria
        .required_features()
        .all(|feature| property.has_feature(feature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_properties;
    use crate::models::{ListingType, PropertyType};
    use std::collections::BTreeSet;

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    /// Sandton house, Cape Town rental apartment, Pretoria townhouse
    fn worked_example() -> Vec<Property> {
        sample_properties().into_iter().take(3).collect()
    }

    #[test]
    fn empty_criteria_keeps_everything() {
        let all = sample_properties();
        let result = filter_properties(&all, &SearchFilters::default());
        assert_eq!(result, all);
    }

    #[test]
    fn house_under_three_million() {
        let criteria = SearchFilters {
            property_types: BTreeSet::from([PropertyType::House]),
            max_price: Some(3_000_000),
            ..Default::default()
        };
        let result = filter_properties(&worked_example(), &criteria);
        assert_eq!(ids(&result), vec!["prop-001"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let criteria = SearchFilters {
            min_price: Some(1_750_000),
            max_price: Some(2_850_000),
            ..Default::default()
        };
        let result = filter_properties(&worked_example(), &criteria);
        assert_eq!(ids(&result), vec!["prop-001", "prop-003"]);
    }

    #[test]
    fn location_matches_suburb_or_city_case_insensitively() {
        let all = sample_properties();
        let by_city = SearchFilters {
            location: Some("  JOHANNESBURG ".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &by_city)), vec!["prop-001", "prop-006"]);

        let by_suburb = SearchFilters {
            location: Some("sea point".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &by_suburb)), vec!["prop-002"]);
    }

    #[test]
    fn query_matches_title_or_description() {
        let all = sample_properties();
        let criteria = SearchFilters {
            query: Some("BOREHOLE".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec!["prop-007"]);

        let criteria = SearchFilters {
            query: Some("townhouse".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec!["prop-003"]);
    }

    #[test]
    fn rooms_are_minimums() {
        let criteria = SearchFilters {
            bedrooms: Some(3),
            bathrooms: Some(3),
            ..Default::default()
        };
        let result = filter_properties(&sample_properties(), &criteria);
        assert_eq!(ids(&result), vec!["prop-001", "prop-007", "prop-008"]);
    }

    #[test]
    fn features_require_all_requested() {
        let all = sample_properties();
        let criteria = SearchFilters {
            features: BTreeSet::from(["garden".to_string(), "Security".to_string()]),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec!["prop-001", "prop-003"]);
    }

    #[test]
    fn missing_size_counts_as_zero() {
        let all = sample_properties();
        let criteria = SearchFilters {
            max_square_meters: Some(80),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec!["prop-004", "prop-005"]);

        let criteria = SearchFilters {
            min_square_meters: Some(1),
            ..Default::default()
        };
        assert!(!ids(&filter_properties(&all, &criteria)).contains(&"prop-005"));
    }

    #[test]
    fn listing_type_is_exact() {
        let criteria = SearchFilters {
            listing_type: Some(ListingType::ToRent),
            ..Default::default()
        };
        let result = filter_properties(&sample_properties(), &criteria);
        assert_eq!(ids(&result), vec!["prop-002", "prop-006"]);
    }

    #[test]
    fn result_is_subset_without_duplicates() {
        let all = sample_properties();
        let criteria = SearchFilters {
            min_price: Some(10_000),
            features: BTreeSet::from(["Pool".to_string()]),
            ..Default::default()
        };
        let result = filter_properties(&all, &criteria);
        let unique: BTreeSet<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(unique.len(), result.len());
        assert!(result.iter().all(|p| all.contains(p)));
    }

    #[test]
    fn criteria_applied_one_at_a_time_match_combined() {
        let all = sample_properties();
        let location = SearchFilters {
            location: Some("cape town".to_string()),
            ..Default::default()
        };
        let price = SearchFilters {
            max_price: Some(20_000_000),
            min_price: Some(20_000),
            ..Default::default()
        };
        let combined = SearchFilters {
            location: location.location.clone(),
            min_price: price.min_price,
            max_price: price.max_price,
            ..Default::default()
        };

        let location_first = filter_properties(&filter_properties(&all, &location), &price);
        let price_first = filter_properties(&filter_properties(&all, &price), &location);
        let at_once = filter_properties(&all, &combined);

        assert_eq!(location_first, price_first);
        assert_eq!(location_first, at_once);
        assert_eq!(ids(&at_once), vec!["prop-008"]);
    }
}
