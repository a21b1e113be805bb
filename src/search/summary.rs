use crate::models::{ListingType, Property, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts shown next to the result list and in the type facets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub total: usize,
    pub by_property_type: BTreeMap<PropertyType, usize>,
    pub by_listing_type: BTreeMap<ListingType, usize>,
}

impl ResultSummary {
    pub fn from_properties(properties: &[Property]) -> Self {
        let mut summary = Self {
            total: properties.len(),
            ..Default::default()
        };
        for property in properties {
            *summary.by_property_type.entry(property.property_type).or_default() += 1;
            *summary.by_listing_type.entry(property.listing_type).or_default() += 1;
        }
        summary
    }

    pub fn count_of(&self, property_type: PropertyType) -> usize {
        self.by_property_type.get(&property_type).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_properties;

    #[test]
    fn counts_by_type() {
        let summary = ResultSummary::from_properties(&sample_properties());
        assert_eq!(summary.total, 8);
        assert_eq!(summary.count_of(PropertyType::House), 2);
        assert_eq!(summary.count_of(PropertyType::Retail), 0);
        assert_eq!(summary.by_listing_type[&ListingType::ToRent], 2);
        assert_eq!(summary.by_listing_type[&ListingType::Sold], 1);
        assert_eq!(summary.by_property_type.values().sum::<usize>(), summary.total);
    }
}
