// SPDX-License-Identifier: PMPL-1.0-or-later

//! Compare: collect two models one after the other and report the diff

use crate::collect::{Collector, CollectorConfig};
use crate::report::{self, OutputFormat, ReportFormatter};
use crate::types::Comparison;
use anyhow::{bail, Result};

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub collector: CollectorConfig,
    pub format: OutputFormat,
    pub color: bool,
    /// Print the command lines and key counts to stderr
    pub verbose: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            collector: CollectorConfig::default(),
            format: OutputFormat::Text,
            color: true,
            verbose: false,
        }
    }
}

/// Reject blank model names; returns the trimmed name
pub fn validate_model_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        bail!("model names cannot be empty");
    }
    Ok(trimmed)
}

/// Run a comparison and write the report to stdout
pub fn run(config: &CompareConfig, left: &str, right: &str) -> Result<Comparison> {
    let formatter = ReportFormatter::with_color(config.color);
    let structured = config.format.is_structured();

    let progress = formatter.comparing(left, right);
    if structured {
        eprintln!("{}", progress);
    } else {
        println!("{}", progress);
    }

    let collector = Collector::new(config.collector.clone());
    let mut collections = Vec::with_capacity(2);
    for model in [left, right] {
        if config.verbose {
            eprintln!("running: {}", collector.command_line(model));
        }
        let collection = collector.collect(model);
        if let Some(err) = &collection.error {
            eprintln!("{}", formatter.collect_error(model, err));
        }
        if config.verbose {
            eprintln!("  {} keys collected for {}", collection.record.len(), model);
        }
        collections.push(collection);
    }

    let comparison = report::compare(&collections[0], &collections[1]);
    match config.format {
        OutputFormat::Text => report::print_report(&comparison, config.color),
        format => println!("{}", format.serialize(&comparison, &formatter)?),
    }

    Ok(comparison)
}
