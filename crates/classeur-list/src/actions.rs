// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::fields::{ListRecord, ListSchema};
use crate::select::SelectionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub requires_confirmation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkFailure<K> {
    pub key: K,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOutcome<K> {
    pub succeeded: Vec<K>,
    pub failed: Vec<BulkFailure<K>>,
}

impl<K> Default for BulkOutcome<K> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<K> BulkOutcome<K> {
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub fn resolve_selected<'a, T, F>(
    schema: &ListSchema<T, F>,
    records: &'a [T],
    selection: &SelectionSet<T::Key>,
) -> Vec<&'a T>
where
    T: ListRecord,
    F: Copy + PartialEq,
{
    records
        .iter()
        .filter(|record| selection.contains(&record.key()) && schema.is_eligible(record))
        .collect()
}
