use crate::models::Property;

pub const DEFAULT_COMPARE_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("you can compare at most {capacity} properties at a time")]
    Full { capacity: usize },
}

/// Listings picked for side-by-side comparison. Lives for one page session
/// and is never persisted.
#[derive(Debug, Clone)]
pub struct ComparisonSet {
    ids: Vec<String>,
    capacity: usize,
}

impl Default for ComparisonSet {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_COMPARE_LIMIT)
    }
}

impl ComparisonSet {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            ids: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `false` if the listing was already selected.
    pub fn add(&mut self, property_id: &str) -> Result<bool, CompareError> {
        if self.has(property_id) {
            return Ok(false);
        }
        if self.is_full() {
            return Err(CompareError::Full {
                capacity: self.capacity,
            });
        }
        self.ids.push(property_id.to_string());
        Ok(true)
    }

    pub fn remove(&mut self, property_id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| id != property_id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn has(&self, property_id: &str) -> bool {
        self.ids.iter().any(|id| id == property_id)
    }

    /// Selected ids in the order they were picked
    pub fn list(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    /// Selected listings in selection order. Ids no longer present in
    /// `properties` are skipped.
    pub fn resolve<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        self.ids
            .iter()
            .filter_map(|id| properties.iter().find(|p| &p.id == id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_properties;

    #[test]
    fn enforces_capacity() {
        let mut compare = ComparisonSet::with_capacity(2);
        assert!(compare.add("prop-001").unwrap());
        assert!(compare.add("prop-002").unwrap());
        assert_eq!(compare.add("prop-003"), Err(CompareError::Full { capacity: 2 }));

        // Re-adding a selected listing is fine even when full
        assert!(!compare.add("prop-001").unwrap());
        assert!(compare.is_full());
    }

    #[test]
    fn remove_frees_a_slot() {
        let mut compare = ComparisonSet::default();
        assert_eq!(compare.capacity(), DEFAULT_COMPARE_LIMIT);
        for id in ["prop-001", "prop-002", "prop-003", "prop-004"] {
            compare.add(id).unwrap();
        }
        assert!(compare.remove("prop-002"));
        assert!(!compare.remove("prop-002"));
        assert!(compare.add("prop-005").unwrap());
        assert_eq!(compare.list(), ["prop-001", "prop-003", "prop-004", "prop-005"]);

        compare.clear();
        assert!(compare.is_empty());
    }

    #[test]
    fn resolves_in_selection_order() {
        let properties = sample_properties();
        let mut compare = ComparisonSet::default();
        compare.add("prop-003").unwrap();
        compare.add("gone").unwrap();
        compare.add("prop-001").unwrap();

        let picked: Vec<&str> = compare
            .resolve(&properties)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(picked, vec!["prop-003", "prop-001"]);
    }

    #[test]
    fn zero_capacity_still_allows_one() {
        let mut compare = ComparisonSet::with_capacity(0);
        assert!(compare.add("prop-001").unwrap());
        assert!(compare.add("prop-002").is_err());
    }
}
