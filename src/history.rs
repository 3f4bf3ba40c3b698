//! Session result store
//!
//! Ordered collection of classification records, newest first. Scoped to
//! the current run: no dedup, no eviction, no persistence.

use livestock_ai_common::types::ClassificationRecord;

#[derive(Debug, Default)]
pub struct SessionHistory {
    records: Vec<ClassificationRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a record; the latest result is always at the front.
    pub fn insert(&mut self, record: ClassificationRecord) {
        self.records.insert(0, record);
    }

    pub fn get(&self, id: &str) -> Option<&ClassificationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
