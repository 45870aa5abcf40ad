// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for model-compare
//!
//! A [`ModelRecord`] is the flattened key/value view of one model's metadata.
//! The differ turns two records into [`DiffEntry`] values and a [`DiffSummary`],
//! and the CLI bundles everything into a [`Comparison`] for rendering.

use serde::Serialize;
use std::collections::HashMap;

/// Flattened metadata for one model.
///
/// Keys are case-insensitive and never overwritten: a colliding key is stored
/// under the first free `key_N` suffix instead. Entries keep first-insertion
/// order and the casing they were inserted with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRecord {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ModelRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&fold_key(key))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(&fold_key(key))
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Insert under `key`, or under `key_1`, `key_2`, ... if taken.
    /// Returns the key actually used.
    pub(crate) fn insert_unique(&mut self, key: String, value: String) -> String {
        let mut unique = key.clone();
        let mut suffix = 1;
        while self.contains_key(&unique) {
            unique = format!("{}_{}", key, suffix);
            suffix += 1;
        }

        self.index.insert(fold_key(&unique), self.entries.len());
        self.entries.push((unique.clone(), value));
        unique
    }
}

impl<K, V> FromIterator<(K, V)> for ModelRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = ModelRecord::new();
        for (key, value) in iter {
            record.insert_unique(key.into(), value.into());
        }
        record
    }
}

fn fold_key(key: &str) -> String {
    key.to_lowercase()
}

/// One classified difference between two records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffEntry {
    /// Key exists only in the right-hand record
    MissingInLeft { key: String, right_value: String },
    /// Key exists only in the left-hand record
    MissingInRight { key: String, left_value: String },
    ValueMismatch {
        key: String,
        left_value: String,
        right_value: String,
    },
}

impl DiffEntry {
    pub fn key(&self) -> &str {
        match self {
            DiffEntry::MissingInLeft { key, .. }
            | DiffEntry::MissingInRight { key, .. }
            | DiffEntry::ValueMismatch { key, .. } => key,
        }
    }
}

/// Per-category counts for a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub missing_in_left: usize,
    pub missing_in_right: usize,
    pub values_differ: usize,
    pub total: usize,
}

impl DiffSummary {
    pub fn record(&mut self, entry: &DiffEntry) {
        match entry {
            DiffEntry::MissingInLeft { .. } => self.missing_in_left += 1,
            DiffEntry::MissingInRight { .. } => self.missing_in_right += 1,
            DiffEntry::ValueMismatch { .. } => self.values_differ += 1,
        }
        self.total = self.missing_in_left + self.missing_in_right + self.values_differ;
    }

    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}

/// Everything needed to render one comparison run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub left_model: String,
    pub right_model: String,
    pub left_keys: usize,
    pub right_keys: usize,
    pub entries: Vec<DiffEntry>,
    pub summary: DiffSummary,
    /// Collection failures, as `(model, message)`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<(String, String)>,
}
