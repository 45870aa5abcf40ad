// SPDX-License-Identifier: PMPL-1.0-or-later

//! Comparison and report module

pub mod diff;
pub mod formatter;
pub mod output;

use crate::collect::Collection;
use crate::types::*;

pub use diff::diff;
pub use formatter::ReportFormatter;
pub use output::OutputFormat;

/// Diff two collected models into a renderable comparison
pub fn compare(left: &Collection, right: &Collection) -> Comparison {
    let (entries, summary) = diff(&left.record, &right.record);
    let warnings = [left, right]
        .iter()
        .filter_map(|c| c.error.as_ref().map(|e| (c.model.clone(), e.to_string())))
        .collect();

    Comparison {
        left_model: left.model.clone(),
        right_model: right.model.clone(),
        left_keys: left.record.len(),
        right_keys: right.record.len(),
        entries,
        summary,
        warnings,
    }
}

/// Print a comparison to the console
pub fn print_report(comparison: &Comparison, color: bool) {
    ReportFormatter::with_color(color).print(comparison);
}
