//! Shared fixtures for the pipeline integration tests.

#![allow(dead_code)]

use std::path::Path;

use dima_pipeline::config::StorageConfig;
use dima_pipeline::{BiasRecord, Config, MappingRun, SemanticRecord};
use serde_json::{json, Value};

pub const SCIM: &str = "https://stratcomcoe.org/influence-mini/ontology#";
pub const DIMA: &str = "https://m82-project.org/dima-bias/ontology#";

/// Configuration with every path under `root` and the local reasoner.
pub fn config_in(root: &Path) -> Config {
    Config {
        storage: StorageConfig::default().rooted_at(root),
        ..Config::default()
    }
}

/// The narrative record of `article` with `motifs` motifs.
///
/// Motif 0 holds argument 0 (premise 0, conclusion 0) and the paraphrased
/// quote 0 that supports premise 0. Further motifs hold one argument each.
pub fn semantic_value(article: &str, motifs: usize) -> Value {
    let motifs: Vec<Value> = (0..motifs)
        .map(|n| {
            let argument = if n == 0 {
                json!({
                    "argument_id": "argument_0",
                    "premises": [{"id": "premise_0", "text": "Prices rose"}],
                    "conclusions": [{"id": "conclusion_0", "text": "Life is harder"}]
                })
            } else {
                json!({
                    "argument_id": format!("argument_{n}"),
                    "premises": [{"id": format!("premise_{n}"), "text": format!("Point {n}")}]
                })
            };
            json!({
                "motif_id": format!("motif_{n}"),
                "text": format!("Paragraph {n} of {article}."),
                "arguments": [argument]
            })
        })
        .collect();
    json!({
        "article_id": article,
        "headline": format!("Headline of {article}"),
        "motifs": motifs,
        "narrated_agents": [{"agent_id": "agent_0", "name": "The minister", "type": "NarratedPolitician"}],
        "quotes": [{
            "quote_id": "quote_0",
            "motif_id": "motif_0",
            "text": "we will act",
            "type": "ParaphrasedQuote",
            "status": "OfficialPosition",
            "attributed_to": ["agent_0"],
            "maps_to_arg_components": ["premise_0"]
        }]
    })
}

/// The bias record attaching NegativityBias to argument 0 with two excerpts.
pub fn bias_value() -> Value {
    json!({
        "Detect": {
            "NegativityBias": [{
                "argument_id": "argument_0",
                "excerpts": ["Prices rose", "Life is harder"],
                "explanation": "Dwells on losses.",
                "premise_ids": ["premise_0"]
            }]
        }
    })
}

pub fn semantic(article: &str, motifs: usize) -> SemanticRecord {
    match serde_json::from_value(semantic_value(article, motifs)) {
        Ok(r) => r,
        Err(e) => panic!("semantic fixture: {e}"),
    }
}

pub fn bias() -> BiasRecord {
    match serde_json::from_value(bias_value()) {
        Ok(r) => r,
        Err(e) => panic!("bias fixture: {e}"),
    }
}

pub fn bias_from(value: Value) -> BiasRecord {
    match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => panic!("bias fixture: {e}"),
    }
}

/// Writes the extractor output files for `article` where `config` expects them.
pub fn write_records(config: &Config, article: &str, motifs: usize) {
    let storage = &config.storage;
    for dir in [&storage.semantic_records, &storage.bias_records] {
        if let Err(e) = std::fs::create_dir_all(dir) {
            panic!("create {}: {e}", dir.display());
        }
    }
    let files = [
        (
            storage.semantic_records.join(format!("article_processed_{article}.json")),
            semantic_value(article, motifs),
        ),
        (
            storage.bias_records.join(format!("article_biases_{article}.json")),
            bias_value(),
        ),
    ];
    for (path, value) in files {
        if let Err(e) = std::fs::write(&path, value.to_string()) {
            panic!("write {}: {e}", path.display());
        }
    }
}

/// Maps `article` with `motifs` motifs through a fresh run and returns the run.
pub fn map_records(config: &Config, article: &str, motifs: usize) -> MappingRun {
    let Ok(mut run) = MappingRun::with_record_directory(config) else {
        panic!("mapping run opens");
    };
    if let Err(e) = run.process_records(&semantic(article, motifs), &bias()) {
        panic!("{article} should map: {e}");
    }
    run
}
