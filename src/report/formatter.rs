// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console rendering of a comparison

use crate::types::*;
use colored::*;

const RULE: &str = "----------------------------";

pub struct ReportFormatter {
    color: bool,
}

impl ReportFormatter {
    /// Formatter that never emits ANSI escapes
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.color {
            text.as_str().color(color).to_string()
        } else {
            text
        }
    }

    pub fn banner(&self) -> Vec<String> {
        vec!["Ollama Model Comparison Tool".to_string(), RULE.to_string()]
    }

    pub fn comparing(&self, left: &str, right: &str) -> String {
        format!("\nComparing models {} and {}...", left, right)
    }

    pub fn input_error(&self) -> String {
        self.paint(
            "Error: Model names cannot be empty.".to_string(),
            Color::Red,
        )
    }

    pub fn collect_error(&self, model: &str, error: &dyn std::fmt::Display) -> String {
        self.paint(
            format!("Error running command for model {}: {}", model, error),
            Color::Red,
        )
    }

    /// Results section followed by the summary
    pub fn render(&self, comparison: &Comparison) -> Vec<String> {
        let left = &comparison.left_model;
        let right = &comparison.right_model;

        let mut lines = vec![
            String::new(),
            format!("Comparison Results: {} vs {}", left, right),
            RULE.to_string(),
        ];

        for entry in &comparison.entries {
            match entry {
                DiffEntry::MissingInLeft { key, right_value } => {
                    lines.push(self.paint(format!("- {}: missing in {}", key, left), Color::Red));
                    lines.push(self.paint(format!("+ {}: {}", key, right_value), Color::Green));
                }
                DiffEntry::MissingInRight { key, left_value } => {
                    lines.push(self.paint(format!("+ {}: {}", key, left_value), Color::Green));
                    lines.push(self.paint(format!("- {}: missing in {}", key, right), Color::Red));
                }
                DiffEntry::ValueMismatch {
                    key,
                    left_value,
                    right_value,
                } => {
                    lines.push(self.paint(format!("* {} differs:", key), Color::Yellow));
                    lines.push(self.paint(format!("- {}: {}", left, left_value), Color::Red));
                    lines.push(self.paint(format!("+ {}: {}", right, right_value), Color::Green));
                }
            }
            lines.push(String::new());
        }

        lines.extend(self.render_summary(comparison));
        lines
    }

    fn render_summary(&self, comparison: &Comparison) -> Vec<String> {
        let summary = &comparison.summary;
        let mut lines = vec![RULE.to_string(), "Comparison Summary:".to_string()];

        if summary.is_clean() {
            lines.push(self.paint(
                "No differences found between the models.".to_string(),
                Color::Blue,
            ));
        } else {
            lines.push(self.paint("Differences detected!".to_string(), Color::Yellow));
            lines.push(format!(
                "- Keys missing in {}: {}",
                comparison.left_model, summary.missing_in_left
            ));
            lines.push(format!(
                "- Keys missing in {}: {}",
                comparison.right_model, summary.missing_in_right
            ));
            lines.push(format!(
                "- Keys with different values: {}",
                summary.values_differ
            ));
            lines.push(format!("- Total differences: {}", summary.total));
        }

        if !comparison.warnings.is_empty() {
            lines.push("Collection warnings:".to_string());
            for (model, message) in &comparison.warnings {
                lines.push(self.paint(format!("! {}: {}", model, message), Color::Red));
            }
        }

        lines
    }

    pub fn print(&self, comparison: &Comparison) {
        for line in self.render(comparison) {
            println!("{}", line);
        }
    }
}
