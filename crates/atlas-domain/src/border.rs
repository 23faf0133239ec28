//! Border module - the ordered outcome of a neighbor fan-out

use crate::country::CountryRecord;

/// Ordered neighbor lookup results, one slot per requested border code
///
/// Slot `i` corresponds to the `i`-th code in the original neighbor list.
/// `None` means that particular neighbor's fetch failed; an absent slot
/// never invalidates its siblings, so positional correspondence with the
/// input codes always holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorderResult(Vec<Option<CountryRecord>>);

impl BorderResult {
    /// An empty result - the country has no neighbors to look up
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a result from per-slot outcomes, preserving order
    pub fn from_slots(slots: Vec<Option<CountryRecord>>) -> Self {
        Self(slots)
    }

    /// Number of slots (equals the number of requested codes)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there were no neighbors to look up
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All slots in input order, absent ones included
    pub fn slots(&self) -> &[Option<CountryRecord>] {
        &self.0
    }

    /// Only the neighbors that were fetched successfully, in input order
    pub fn present(&self) -> impl Iterator<Item = &CountryRecord> {
        self.0.iter().filter_map(Option::as_ref)
    }

    /// Number of successfully fetched neighbors
    pub fn present_count(&self) -> usize {
        self.present().count()
    }

    /// Number of neighbors whose fetch failed
    pub fn absent_count(&self) -> usize {
        self.len() - self.present_count()
    }
}

impl From<Vec<Option<CountryRecord>>> for BorderResult {
    fn from(slots: Vec<Option<CountryRecord>>) -> Self {
        Self::from_slots(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::BorderCode;

    fn record(name: &str) -> CountryRecord {
        CountryRecord {
            name: name.to_string(),
            capital: vec![],
            population: 0,
            region: "Test".to_string(),
            flag_url: String::new(),
            borders: Vec::<BorderCode>::new(),
        }
    }

    #[test]
    fn test_empty_result() {
        let result = BorderResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.present_count(), 0);
    }

    #[test]
    fn test_absent_slots_preserve_positions() {
        let result = BorderResult::from_slots(vec![
            Some(record("Austria")),
            None,
            Some(record("Croatia")),
        ]);

        assert_eq!(result.len(), 3);
        assert_eq!(result.present_count(), 2);
        assert_eq!(result.absent_count(), 1);
        assert!(result.slots()[1].is_none());

        let names: Vec<&str> = result.present().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Austria", "Croatia"]);
    }
}
