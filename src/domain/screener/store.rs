use std::sync::Arc;

use super::comparator::SortState;
use super::criteria::FilterCriteria;
use super::query::{distinct_categories, query_records};
use super::record::Record;

/// Read-only rows a view operates over. Cloning shares the rows.
#[derive(Debug)]
pub struct RecordStore<R> {
    records: Arc<Vec<R>>,
}

impl<R> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self { records: Arc::clone(&self.records) }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records: Arc::new(records) }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|record| record.key() == key)
    }

    pub fn query(&self, criteria: &FilterCriteria<R::Field>, sort: &SortState<R::Field>) -> Vec<&R> {
        query_records(&self.records, criteria, sort)
    }

    pub fn categories(&self) -> Vec<&str> {
        distinct_categories(&self.records)
    }
}

impl<R: Record> From<Vec<R>> for RecordStore<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}
