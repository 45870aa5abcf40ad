// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported comparisons

use crate::report::formatter::ReportFormatter;
use crate::types::Comparison;
use anyhow::{Context, Result};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Whether stdout carries a machine-readable document
    pub fn is_structured(&self) -> bool {
        !matches!(self, OutputFormat::Text)
    }

    pub fn serialize(&self, comparison: &Comparison, formatter: &ReportFormatter) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(formatter.render(comparison).join("\n")),
            OutputFormat::Json => {
                serde_json::to_string_pretty(comparison).context("serializing comparison as json")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(comparison).context("serializing comparison as yaml")
            }
        }
    }
}
