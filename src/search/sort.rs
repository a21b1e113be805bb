use crate::models::Property;
use crate::search::filter::location_haystack;
use crate::search::types::{SearchFilters, SortKey};
use std::cmp::{Ordering, Reverse};

const LOCATION_SCORE: u32 = 10;
const TYPE_SCORE: u32 = 5;

/// Order listings by `key`. The sort is stable, so listings with equal keys
/// keep their input order and pages do not shuffle between renders.
///
/// `criteria` is only consulted for [`SortKey::Relevance`].
pub fn sort_properties(
    mut properties: Vec<Property>,
    key: SortKey,
    criteria: &SearchFilters,
) -> Vec<Property> {
    match key {
        SortKey::DateDesc => properties.sort_by_key(|p| Reverse(p.date_added)),
        SortKey::DateAsc => properties.sort_by_key(|p| p.date_added),
        SortKey::PriceAsc => properties.sort_by_key(|p| p.price),
        SortKey::PriceDesc => properties.sort_by_key(|p| Reverse(p.price)),
        SortKey::SizeAsc => properties.sort_by_key(|p| p.size()),
        SortKey::SizeDesc => properties.sort_by_key(|p| Reverse(p.size())),
        SortKey::Relevance => {
            properties.sort_by(|a, b| compare_relevance(a, b, criteria));
        }
    }
    properties
}

/// Score from location and type matches. Price proximity is settled
/// pairwise in [`compare_relevance`].
pub fn relevance_score(property: &Property, criteria: &SearchFilters) -> u32 {
    let mut score = 0;

    if let Some(location) = criteria.location_text() {
        if location_haystack(property)
            .to_lowercase()
            .contains(&location.to_lowercase())
        {
            score += LOCATION_SCORE;
        }
    }

    if criteria.property_types.contains(&property.property_type) {
        score += TYPE_SCORE;
    }

    score
}

fn midpoint_distance(property: &Property, criteria: &SearchFilters) -> Option<u64> {
    criteria
        .price_midpoint()
        .map(|midpoint| property.price.abs_diff(midpoint))
}

/// Higher score first. The listing closer to the price midpoint earns +3,
/// which can only break ties since scores otherwise move in steps of 5.
fn compare_relevance(a: &Property, b: &Property, criteria: &SearchFilters) -> Ordering {
    let by_score = relevance_score(b, criteria).cmp(&relevance_score(a, criteria));
    if by_score != Ordering::Equal {
        return by_score;
    }

    match (midpoint_distance(a, criteria), midpoint_distance(b, criteria)) {
        (Some(da), Some(db)) => da.cmp(&db),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_properties;
    use crate::models::PropertyType;
    use std::collections::BTreeSet;

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    fn worked_example() -> Vec<Property> {
        sample_properties().into_iter().take(3).collect()
    }

    #[test]
    fn price_ascending() {
        let sorted = sort_properties(worked_example(), SortKey::PriceAsc, &SearchFilters::default());
        assert_eq!(ids(&sorted), vec!["prop-002", "prop-003", "prop-001"]);
    }

    #[test]
    fn price_descending() {
        let sorted = sort_properties(worked_example(), SortKey::PriceDesc, &SearchFilters::default());
        assert_eq!(ids(&sorted), vec!["prop-001", "prop-003", "prop-002"]);
    }

    #[test]
    fn newest_first_by_default() {
        let sorted = sort_properties(sample_properties(), SortKey::default(), &SearchFilters::default());
        assert_eq!(sorted[0].id, "prop-002");
        assert_eq!(sorted.last().unwrap().id, "prop-007");

        let oldest = sort_properties(sample_properties(), SortKey::DateAsc, &SearchFilters::default());
        assert_eq!(oldest[0].id, "prop-007");
    }

    #[test]
    fn size_treats_missing_as_zero() {
        let sorted = sort_properties(sample_properties(), SortKey::SizeAsc, &SearchFilters::default());
        assert_eq!(sorted[0].id, "prop-005");

        let sorted = sort_properties(sample_properties(), SortKey::SizeDesc, &SearchFilters::default());
        assert_eq!(sorted[0].id, "prop-008");
        assert_eq!(sorted.last().unwrap().id, "prop-005");
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut properties = sample_properties();
        for p in &mut properties {
            p.price = 1_000_000;
        }
        let input = ids(&properties).into_iter().map(String::from).collect::<Vec<_>>();

        let sorted = sort_properties(properties.clone(), SortKey::PriceAsc, &SearchFilters::default());
        assert_eq!(ids(&sorted), input);

        let sorted = sort_properties(properties.clone(), SortKey::PriceDesc, &SearchFilters::default());
        assert_eq!(ids(&sorted), input);

        let mut reversed = properties;
        reversed.reverse();
        let sorted = sort_properties(reversed.clone(), SortKey::Relevance, &SearchFilters::default());
        assert_eq!(sorted, reversed);
    }

    #[test]
    fn relevance_prefers_location_then_type() {
        let criteria = SearchFilters {
            location: Some("Johannesburg".to_string()),
            property_types: BTreeSet::from([PropertyType::Townhouse, PropertyType::House]),
            ..Default::default()
        };
        assert_eq!(relevance_score(&sample_properties()[0], &criteria), 15);

        let sorted = sort_properties(worked_example(), SortKey::Relevance, &criteria);
        // Sandton house 15, Pretoria townhouse 5, Cape Town apartment 0
        assert_eq!(ids(&sorted), vec!["prop-001", "prop-003", "prop-002"]);
    }

    #[test]
    fn relevance_breaks_ties_by_price_midpoint() {
        let criteria = SearchFilters {
            min_price: Some(1_000_000),
            max_price: Some(3_000_000),
            ..Default::default()
        };
        // midpoint 2,000,000: townhouse (250k away) beats house (850k away)
        let sorted = sort_properties(worked_example(), SortKey::Relevance, &criteria);
        assert_eq!(ids(&sorted), vec!["prop-003", "prop-001", "prop-002"]);
    }

    #[test]
    fn price_proximity_never_beats_a_type_match() {
        let criteria = SearchFilters {
            property_types: BTreeSet::from([PropertyType::Apartment]),
            min_price: Some(1_000_000),
            max_price: Some(3_000_000),
            ..Default::default()
        };
        let sorted = sort_properties(worked_example(), SortKey::Relevance, &criteria);
        assert_eq!(sorted[0].id, "prop-002");
    }
}
