// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionSummary {
    None,
    Partial,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<K> {
    keys: BTreeSet<K>,
}

// Derived Default would demand K: Default for an always-empty set.
impl<K> Default for SelectionSet<K> {
    fn default() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }
}

impl<K: Clone + Ord> SelectionSet<K> {
    pub fn toggle(&mut self, key: K) {
        if !self.keys.remove(&key) {
            self.keys.insert(key);
        }
    }

    pub fn insert(&mut self, key: K) {
        self.keys.insert(key);
    }

    pub fn remove(&mut self, key: &K) {
        self.keys.remove(key);
    }

    pub fn insert_all(&mut self, keys: &[K]) {
        for key in keys {
            self.keys.insert(key.clone());
        }
    }

    pub fn remove_all(&mut self, keys: &[K]) {
        for key in keys {
            self.keys.remove(key);
        }
    }

    pub fn invert_each(&mut self, keys: &[K]) {
        for key in keys {
            self.toggle(key.clone());
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn retain(&mut self, keep: impl FnMut(&K) -> bool) {
        self.keys.retain(keep);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    pub fn to_vec(&self) -> Vec<K> {
        self.keys.iter().cloned().collect()
    }

    pub fn classify(&self, relevant: &[K]) -> SelectionSummary {
        if relevant.is_empty() {
            return SelectionSummary::None;
        }

        let selected = relevant.iter().filter(|key| self.keys.contains(*key)).count();
        if selected == 0 {
            SelectionSummary::None
        } else if selected == relevant.len() {
            SelectionSummary::Full
        } else {
            SelectionSummary::Partial
        }
    }
}
