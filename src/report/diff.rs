// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record diffing

use crate::types::*;
use std::collections::HashSet;

/// Compare two records key by key.
///
/// Keys are visited in left-record order followed by right-only keys, each
/// case-insensitive key once. Values are trimmed before comparison and the
/// comparison itself is case-sensitive.
pub fn diff(left: &ModelRecord, right: &ModelRecord) -> (Vec<DiffEntry>, DiffSummary) {
    let mut entries = Vec::new();
    let mut summary = DiffSummary::default();
    let mut seen = HashSet::new();

    for key in left.keys().chain(right.keys()) {
        if !seen.insert(key.to_lowercase()) {
            continue;
        }

        let entry = match (left.get(key), right.get(key)) {
            (None, Some(value)) => DiffEntry::MissingInLeft {
                key: key.to_string(),
                right_value: value.trim().to_string(),
            },
            (Some(value), None) => DiffEntry::MissingInRight {
                key: key.to_string(),
                left_value: value.trim().to_string(),
            },
            (Some(l), Some(r)) if l.trim() != r.trim() => DiffEntry::ValueMismatch {
                key: key.to_string(),
                left_value: l.trim().to_string(),
                right_value: r.trim().to_string(),
            },
            _ => continue,
        };

        summary.record(&entry);
        entries.push(entry);
    }

    (entries, summary)
}
