// SPDX-License-Identifier: PMPL-1.0-or-later

//! Metadata collection module
//!
//! Runs the model-management command once per model and parses its stdout
//! into a [`ModelRecord`]. Collection never aborts the run: failures come back
//! as a [`CollectError`] next to whatever record could be built.

pub mod parser;
mod runner;

use crate::types::ModelRecord;
use std::time::Duration;

pub use parser::{parse_show_output, ShowParser};

pub const DEFAULT_PROGRAM: &str = "ollama";

#[derive(thiserror::Error, Debug)]
pub enum CollectError {
    #[error("failed to start `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("command failed ({status})")]
    ExitStatus { status: String },
    #[error("reading command output: {0}")]
    Io(#[from] std::io::Error),
    #[error("command timed out after {secs:.1}s")]
    TimedOut { secs: f64 },
}

/// How to invoke the metadata command
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub program: String,
    /// Arguments placed before the model name
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec!["show".to_string(), "--verbose".to_string()],
            timeout: None,
        }
    }
}

/// Result of collecting one model
#[derive(Debug)]
pub struct Collection {
    pub model: String,
    pub record: ModelRecord,
    pub error: Option<CollectError>,
}

pub struct Collector {
    config: CollectorConfig,
    parser: ShowParser,
}

impl Collector {
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            config,
            parser: ShowParser::new(),
        }
    }

    /// Human-readable command line for `model`
    pub fn command_line(&self, model: &str) -> String {
        let mut parts = vec![self.config.program.as_str()];
        parts.extend(self.config.args.iter().map(String::as_str));
        parts.push(model);
        parts.join(" ")
    }

    pub fn collect(&self, model: &str) -> Collection {
        let mut args = self.config.args.clone();
        args.push(model.to_string());

        let output = match runner::run(&self.config.program, &args, self.config.timeout) {
            Ok(output) => output,
            Err(err) => {
                return Collection {
                    model: model.to_string(),
                    record: ModelRecord::new(),
                    error: Some(err),
                }
            }
        };

        let record = self.parser.parse(&output.stdout);
        let error = if output.timed_out {
            Some(CollectError::TimedOut {
                secs: self
                    .config
                    .timeout
                    .map(|t| t.as_secs_f64())
                    .unwrap_or_default(),
            })
        } else if !output.status.success() {
            Some(CollectError::ExitStatus {
                status: output.status.to_string(),
            })
        } else {
            None
        };

        Collection {
            model: model.to_string(),
            record,
            error,
        }
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}

/// Collect one model with the default `ollama show --verbose` invocation
pub fn collect(model: &str) -> Collection {
    Collector::default().collect(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh_collector(script: &str) -> Collector {
        Collector::new(CollectorConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), "sh".to_string()],
            timeout: None,
        })
    }

    #[test]
    fn test_command_line_appends_model() {
        let collector = Collector::default();
        assert_eq!(
            collector.command_line("llama3.1:8b"),
            "ollama show --verbose llama3.1:8b"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_parses_stdout() {
        // $1 is the model name appended after the script
        let collection = sh_collector("printf 'Model\\n  name    %s\\n' \"$1\"").collect("qwen2");
        assert!(collection.error.is_none());
        assert_eq!(collection.model, "qwen2");
        assert_eq!(collection.record.get("Model.name"), Some("qwen2"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_keeps_partial_record() {
        let collection = sh_collector("printf '  arch    llama\\n'; exit 1").collect("m");
        assert!(matches!(
            collection.error,
            Some(CollectError::ExitStatus { .. })
        ));
        assert_eq!(collection.record.get("arch"), Some("llama"));
    }

    #[test]
    fn test_launch_failure_yields_empty_record() {
        let collector = Collector::new(CollectorConfig {
            program: "model-compare-no-such-binary".to_string(),
            ..CollectorConfig::default()
        });
        let collection = collector.collect("m");
        assert!(collection.record.is_empty());
        let message = collection.error.expect("launch should fail").to_string();
        assert!(message.contains("model-compare-no-such-binary"));
    }

    #[test]
    fn test_default_collect_never_fails_the_run() {
        // Either ollama is absent (launch error) or it rejects the unknown model
        let collection = collect("model-compare-no-such-model:latest");
        assert_eq!(collection.model, "model-compare-no-such-model:latest");
        assert!(collection.error.is_some());
        assert!(collection.record.is_empty());
    }
}
