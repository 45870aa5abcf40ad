// SPDX-License-Identifier: PMPL-1.0-or-later

//! model-compare — metadata diffing for local Ollama models.
//!
//! Runs `ollama show --verbose` for two models, flattens each output into a
//! case-insensitive key/value record, and reports keys missing on either side
//! and keys whose values differ.
//!
//! PIPELINE:
//! 1. **Collect**: spawn the command, capture stdout, parse into a record.
//! 2. **Diff**: pure classification of the key union into missing-left,
//!    missing-right, and value-mismatch entries with summary counts.
//! 3. **Report**: colored console text, or JSON/YAML.

pub mod collect;
pub mod compare;
pub mod report;
pub mod types;
