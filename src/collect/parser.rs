// SPDX-License-Identifier: PMPL-1.0-or-later

//! Parser for `ollama show --verbose` style output
//!
//! The text is treated as two-level and otherwise opaque. An unindented line
//! without a double-space run opens a section. Any other line is split on runs
//! of two or more whitespace characters into a key and a value, and the key is
//! namespaced as `<section>.<key>` while a section is open.

use crate::types::ModelRecord;
use regex::Regex;

pub struct ShowParser {
    column_gap: Regex,
}

impl ShowParser {
    pub fn new() -> Self {
        Self {
            column_gap: Regex::new(r"\s{2,}").unwrap(),
        }
    }

    pub fn parse(&self, output: &str) -> ModelRecord {
        let mut record = ModelRecord::new();
        let mut section = String::new();

        for line in output.split(|c: char| c == '\r' || c == '\n') {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if is_section_header(line, trimmed) {
                section = trimmed.to_string();
                continue;
            }

            let parts: Vec<&str> = self.column_gap.split(trimmed).collect();
            if parts.len() < 2 {
                // Indented line with no second column
                continue;
            }

            let key = parts[0].trim();
            let value = parts[1..].join(" ").trim().to_string();
            let key = if section.is_empty() {
                key.to_string()
            } else {
                format!("{}.{}", section, key)
            };

            record.insert_unique(key, value);
        }

        record
    }
}

impl Default for ShowParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_section_header(line: &str, trimmed: &str) -> bool {
    !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.contains("  ")
}

/// Parse captured command output into a record
pub fn parse_show_output(output: &str) -> ModelRecord {
    ShowParser::new().parse(output)
}
