//! Implementor index model.

use crate::model::record::ImplementorRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from library name to its ordered implementor records.
///
/// Library keys are unique and their iteration order carries no meaning;
/// record order inside each library is display order and is preserved end to
/// end. An empty record list is a valid value and is distinct from an absent
/// key: it renders as "no implementors", not as a missing library.
///
/// Serializes transparently as one object keyed by library, the same shape
/// the documentation build step emits per trait.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorIndex {
    libraries: BTreeMap<String, Vec<ImplementorRecord>>,
}

impl ImplementorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full record sequence for one library.
    pub fn set_library(&mut self, library: impl Into<String>, records: Vec<ImplementorRecord>) {
        self.libraries.insert(library.into(), records);
    }

    /// Creates the library key with an empty record list when absent.
    pub fn ensure_library(&mut self, library: &str) {
        self.libraries.entry(library.to_string()).or_default();
    }

    /// Appends one record to a library, creating the key on first use.
    pub fn push_record(&mut self, library: &str, record: ImplementorRecord) {
        self.libraries
            .entry(library.to_string())
            .or_default()
            .push(record);
    }

    /// Returns the ordered records for one library.
    pub fn records(&self, library: &str) -> Option<&[ImplementorRecord]> {
        self.libraries.get(library).map(Vec::as_slice)
    }

    pub fn contains_library(&self, library: &str) -> bool {
        self.libraries.contains_key(library)
    }

    /// Returns sorted library names.
    pub fn library_names(&self) -> Vec<&str> {
        self.libraries.keys().map(String::as_str).collect()
    }

    /// Number of library keys, including those with empty record lists.
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Iterates libraries with their ordered record slices.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ImplementorRecord])> {
        self.libraries
            .iter()
            .map(|(library, records)| (library.as_str(), records.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::ImplementorIndex;
    use crate::model::record::ImplementorRecord;

    fn record(html: &str) -> ImplementorRecord {
        ImplementorRecord::new(html, vec!["demo::Probe".to_string()])
    }

    #[test]
    fn preserves_record_order_within_library() {
        let mut index = ImplementorIndex::new();
        index.push_record("demo_lib", record("first"));
        index.push_record("demo_lib", record("second"));
        index.push_record("demo_lib", record("third"));

        let records = index.records("demo_lib").expect("library should exist");
        let order: Vec<&str> = records.iter().map(|r| r.html.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_library_is_present_not_absent() {
        let mut index = ImplementorIndex::new();
        index.ensure_library("quiet_lib");

        assert!(index.contains_library("quiet_lib"));
        assert_eq!(index.records("quiet_lib"), Some(&[][..]));
        assert_eq!(index.records("missing_lib"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn set_library_replaces_existing_records() {
        let mut index = ImplementorIndex::new();
        index.push_record("demo_lib", record("old"));
        index.set_library("demo_lib", vec![record("new")]);

        let records = index.records("demo_lib").expect("library should exist");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].html, "new");
    }

    #[test]
    fn library_names_are_sorted_and_unique() {
        let mut index = ImplementorIndex::new();
        index.ensure_library("zeta");
        index.ensure_library("alpha");
        index.push_record("alpha", record("impl"));

        assert_eq!(index.library_names(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn serializes_as_plain_library_object() {
        let mut index = ImplementorIndex::new();
        index.push_record("demo_lib", record("impl Copy for Probe"));

        let json = serde_json::to_value(&index).expect("index should serialize");
        let records = json
            .get("demo_lib")
            .and_then(|value| value.as_array())
            .expect("library key should map to an array");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["text"], "impl Copy for Probe");
        assert_eq!(records[0]["synthetic"], false);
        assert_eq!(records[0]["types"][0], "demo::Probe");
    }
}
