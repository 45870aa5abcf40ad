// SPDX-License-Identifier: PMPL-1.0-or-later

//! Parse-then-diff properties over realistic `ollama show --verbose` text

use model_compare::collect::parse_show_output;
use model_compare::report::diff;
use model_compare::types::*;
use std::collections::HashSet;

const LLAMA: &str = r#"Model
  architecture        llama
  parameters          8.0B
  context length      131072
  embedding length    4096
  quantization        Q4_K_M

Parameters
  stop    "<|start_header_id|>"
  stop    "<|end_header_id|>"
  stop    "<|eot_id|>"

License
  LLAMA 3.1 COMMUNITY LICENSE AGREEMENT
  Llama 3.1 Version Release Date: July 23, 2024
"#;

const QWEN: &str = r#"Model
  architecture        qwen2
  parameters          7.6B
  context length      32768
  embedding length    3584
  quantization        Q4_K_M

Parameters
  stop           "<|im_start|>"
  temperature    0.7

System
  You are Qwen, created by Alibaba Cloud.
"#;

#[test]
fn test_repeated_stop_sequences_are_all_kept() {
    let record = parse_show_output(LLAMA);
    assert_eq!(record.get("Parameters.stop"), Some("\"<|start_header_id|>\""));
    assert_eq!(record.get("Parameters.stop_1"), Some("\"<|end_header_id|>\""));
    assert_eq!(record.get("Parameters.stop_2"), Some("\"<|eot_id|>\""));
    assert!(!record.contains_key("Parameters.stop_3"));
}

#[test]
fn test_license_prose_is_not_recorded() {
    let record = parse_show_output(LLAMA);
    assert!(
        record.keys().all(|k| !k.starts_with("License")),
        "single-column license text should be skipped"
    );
    assert_eq!(record.len(), 8);
}

#[test]
fn test_self_comparison_is_clean() {
    let record = parse_show_output(QWEN);
    let (entries, summary) = diff(&record, &parse_show_output(QWEN));
    assert!(entries.is_empty());
    assert_eq!(summary, DiffSummary::default());
}

#[test]
fn test_llama_vs_qwen() {
    let left = parse_show_output(LLAMA);
    let right = parse_show_output(QWEN);
    let (entries, summary) = diff(&left, &right);

    // architecture, parameters, context length, embedding length, first stop
    assert_eq!(summary.values_differ, 5);
    // stop_1, stop_2
    assert_eq!(summary.missing_in_right, 2);
    // temperature
    assert_eq!(summary.missing_in_left, 1);
    assert_eq!(summary.total, 8);

    assert!(entries.contains(&DiffEntry::MissingInLeft {
        key: "Parameters.temperature".into(),
        right_value: "0.7".into(),
    }));
    assert!(!entries.iter().any(|e| e.key() == "Model.quantization"));
}

#[test]
fn test_every_union_key_classified_once() {
    let left = parse_show_output(LLAMA);
    let right = parse_show_output(QWEN);
    let (entries, summary) = diff(&left, &right);

    let mut seen = HashSet::new();
    for entry in &entries {
        assert!(
            seen.insert(entry.key().to_lowercase()),
            "key {} reported twice",
            entry.key()
        );
    }

    let union: HashSet<String> = left
        .keys()
        .chain(right.keys())
        .map(str::to_lowercase)
        .collect();
    let equal = union
        .iter()
        .filter(|k| match (left.get(k), right.get(k)) {
            (Some(l), Some(r)) => l.trim() == r.trim(),
            _ => false,
        })
        .count();
    assert_eq!(entries.len() + equal, union.len());
    assert_eq!(
        summary.missing_in_left + summary.missing_in_right + summary.values_differ,
        summary.total
    );
    assert_eq!(summary.total, entries.len());
}

#[test]
fn test_section_prefix_depends_on_position() {
    let before = parse_show_output("  format    gguf\n");
    let after = parse_show_output("Details\n  format    gguf\n");
    assert_eq!(before.get("format"), Some("gguf"));
    assert_eq!(after.get("Details.format"), Some("gguf"));

    let (entries, _) = diff(&before, &after);
    assert_eq!(entries.len(), 2);
}
