// SPDX-License-Identifier: PMPL-1.0-or-later

//! model-compare: diff the metadata of two local Ollama models
//!
//! Model names come from the command line, or are prompted for on stdin when
//! omitted. Each model is described with `ollama show --verbose` and the two
//! flattened records are compared key by key.

use anyhow::{Context, Result};
use clap::Parser;
use model_compare::collect::{CollectorConfig, DEFAULT_PROGRAM};
use model_compare::compare::{self, CompareConfig};
use model_compare::report::{OutputFormat, ReportFormatter};
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Duration;

const EXIT_DIFFERENCES: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Parser)]
#[command(name = "model-compare")]
#[command(version)]
#[command(about = "Compare the metadata of two local Ollama models")]
#[command(long_about = None)]
struct Cli {
    /// First model (prompted for when omitted)
    #[arg(value_name = "MODEL1")]
    model1: Option<String>,

    /// Second model (prompted for when omitted)
    #[arg(value_name = "MODEL2")]
    model2: Option<String>,

    /// Model-management executable, resolved via PATH
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    command: String,

    /// Kill the command if it runs longer than this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Exit with status 1 when differences are found
    #[arg(long)]
    fail_on_diff: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let color = !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }
    let formatter = ReportFormatter::with_color(color);
    let structured = cli.format.is_structured();

    for line in formatter.banner() {
        if structured {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let model1 = match cli.model1 {
        Some(name) => name,
        None => prompt(&mut input, "Enter first model name: ", structured)?,
    };
    let model2 = match cli.model2 {
        Some(name) => name,
        None => prompt(&mut input, "Enter second model name: ", structured)?,
    };

    let (left, right) = match (
        compare::validate_model_name(&model1),
        compare::validate_model_name(&model2),
    ) {
        (Ok(left), Ok(right)) => (left, right),
        _ => {
            eprintln!("{}", formatter.input_error());
            process::exit(EXIT_INVALID_INPUT);
        }
    };

    let config = CompareConfig {
        collector: CollectorConfig {
            program: cli.command,
            timeout: cli.timeout.map(Duration::from_secs),
            ..CollectorConfig::default()
        },
        format: cli.format,
        color,
        verbose: cli.verbose,
    };

    let comparison = compare::run(&config, left, right)?;

    if cli.fail_on_diff && !comparison.summary.is_clean() {
        process::exit(EXIT_DIFFERENCES);
    }

    Ok(())
}

/// Ask for one line on stdin. EOF yields an empty string.
fn prompt(input: &mut impl BufRead, message: &str, structured: bool) -> Result<String> {
    if structured {
        eprint!("{}", message);
        io::stderr().flush().context("flushing prompt")?;
    } else {
        print!("{}", message);
        io::stdout().flush().context("flushing prompt")?;
    }

    let mut line = String::new();
    input.read_line(&mut line).context("reading model name")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
