//! Overwrite semantics, determinism and cross-module integrity of the
//! persisted module graphs.

mod common;

use std::collections::BTreeSet;
use std::fs;

use common::{bias, bias_from, config_in, map_records, semantic, SCIM};
use dima_ontology::vocab::{dima, scim};
use dima_ontology::{Graph, ModuleId, Triple};
use dima_pipeline::assembler;
use dima_pipeline::{ArticleError, BiasRecord, MappingRun};
use serde_json::json;

fn individuals(graph: &Graph, article: &str) -> BTreeSet<String> {
    graph.iris_with_prefix(&format!("{SCIM}{article}_"))
}

fn triples_mentioning(graph: &Graph, article: &str) -> Vec<Triple> {
    let prefix = format!("{SCIM}{article}_");
    graph
        .iter()
        .filter(|t| {
            [&t.subject, &t.object]
                .into_iter()
                .filter_map(|term| term.as_iri())
                .any(|iri| iri.starts_with(&prefix))
        })
        .cloned()
        .collect()
}

fn persisted(run: &MappingRun, module: ModuleId) -> Graph {
    match assembler::load(run.store(module).path()) {
        Ok(g) => g,
        Err(e) => panic!("persisted graph reloads: {e}"),
    }
}

// ============================================================================
// Overwrite, not append
// ============================================================================

#[test]
fn mapping_twice_is_idempotent() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let config = config_in(dir.path());
    let mut run = map_records(&config, "ex1", 2);
    let first = persisted(&run, ModuleId::InfluenceMini);
    let first_dima = persisted(&run, ModuleId::DimaBias);

    let Ok(report) = run.process_records(&semantic("ex1", 2), &bias()) else {
        panic!("second pass maps");
    };
    assert_eq!(report.influence_mini.removed, report.influence_mini.inserted);
    assert_eq!(persisted(&run, ModuleId::InfluenceMini), first);
    assert_eq!(persisted(&run, ModuleId::DimaBias), first_dima);

    // one hasId per individual means no duplicate individuals
    let ids = first
        .iter()
        .filter(|t| t.predicate == scim::HAS_ID)
        .count();
    assert_eq!(ids, individuals(&first, "ex1").len());
}

#[test]
fn separate_runs_persist_identical_graphs() {
    let (Ok(a), Ok(b)) = (tempfile::tempdir(), tempfile::tempdir()) else {
        panic!("tempdir");
    };
    let (config_a, config_b) = (config_in(a.path()), config_in(b.path()));
    let run_a = map_records(&config_a, "ex1", 2);
    let run_b = map_records(&config_b, "ex1", 2);
    for module in ModuleId::ALL {
        assert_eq!(persisted(&run_a, module), persisted(&run_b, module));
        let (Ok(bytes_a), Ok(bytes_b)) = (
            fs::read(config_a.storage.graph_path(module)),
            fs::read(config_b.storage.graph_path(module)),
        ) else {
            panic!("graph files exist");
        };
        assert_eq!(bytes_a, bytes_b);
    }
}

#[test]
fn fewer_motifs_drop_the_stale_ones() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let config = config_in(dir.path());
    let mut run = map_records(&config, "ex1", 3);
    let stale = format!("{SCIM}ex1_motif_2");
    assert!(run.store(ModuleId::InfluenceMini).graph().has_type(&stale, scim::MOTIF));

    assert!(run.process_records(&semantic("ex1", 1), &bias()).is_ok());
    let graph = persisted(&run, ModuleId::InfluenceMini);
    assert!(!graph.iter().any(|t| t.mentions(&stale)));
    assert!(!individuals(&graph, "ex1").contains(&format!("{SCIM}ex1_argument_1")));
    assert!(graph.has_type(&format!("{SCIM}ex1_motif_0"), scim::MOTIF));
}

#[test]
fn reprocessing_ex1_leaves_ex10_alone() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let config = config_in(dir.path());
    let mut run = map_records(&config, "ex10", 2);
    let before = triples_mentioning(run.store(ModuleId::InfluenceMini).graph(), "ex10");
    let dima_before = persisted(&run, ModuleId::DimaBias)
        .iter()
        .filter(|t| t.mentions(&format!("{SCIM}ex10_argument_0")))
        .count();

    for motifs in [2, 1] {
        assert!(run.process_records(&semantic("ex1", motifs), &bias()).is_ok());
    }
    let graph = persisted(&run, ModuleId::InfluenceMini);
    assert_eq!(triples_mentioning(&graph, "ex10"), before);
    let dima_after = persisted(&run, ModuleId::DimaBias)
        .iter()
        .filter(|t| t.mentions(&format!("{SCIM}ex10_argument_0")))
        .count();
    assert_eq!(dima_after, dima_before);

    let Ok(reopened) = MappingRun::with_record_directory(&config) else {
        panic!("run reopens");
    };
    let articles: Vec<String> = reopened
        .store(ModuleId::InfluenceMini)
        .articles()
        .into_iter()
        .collect();
    assert_eq!(articles, ["ex1", "ex10"]);
}

// ============================================================================
// Cross-module integrity
// ============================================================================

#[test]
fn unknown_argument_is_an_integrity_error() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let config = config_in(dir.path());
    let mut run = map_records(&config, "ex1", 1);
    let scim_before = run.store(ModuleId::InfluenceMini).graph().clone();
    let Ok(file_before) = fs::read(&config.storage.influence_mini_graph) else {
        panic!("graph file exists");
    };
    let dima_before = run.store(ModuleId::DimaBias).graph().clone();

    let record = bias_from(json!({
        "Detect": {"NegativityBias": [{"argument_id": "argument_7", "excerpts": ["x"]}]}
    }));
    let err = run.process_biases("ex1", &record);
    let Err(ArticleError::Integrity(err)) = err else {
        panic!("argument_7 was never persisted");
    };
    assert_eq!(err.iri, format!("{SCIM}ex1_argument_7"));

    assert_eq!(run.store(ModuleId::InfluenceMini).graph(), &scim_before);
    assert_eq!(fs::read(&config.storage.influence_mini_graph).ok(), Some(file_before));
    assert_eq!(run.store(ModuleId::DimaBias).graph(), &dima_before);
}

fn two_argument_bias() -> BiasRecord {
    bias_from(json!({
        "Detect": {"NegativityBias": [{"argument_id": "argument_0", "excerpts": ["Prices rose"]}]},
        "Memorise": {"RecencyEffect": [{"argument_id": "argument_1", "excerpts": ["Point 1"]}]}
    }))
}

/// Every subject of `dima:usesTechnique` is typed in the influence-mini graph.
fn dangling_usages(scim_graph: &Graph, dima_graph: &Graph) -> Vec<String> {
    dima_graph
        .iter()
        .filter(|t| t.predicate == dima::USES_TECHNIQUE)
        .filter_map(|t| t.subject.as_iri())
        .filter(|iri| scim_graph.types_of(iri).next().is_none())
        .map(str::to_owned)
        .collect()
}

#[test]
fn failed_link_on_reprocessing_leaves_no_dangling_usages() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let config = config_in(dir.path());
    let Ok(mut run) = MappingRun::with_record_directory(&config) else {
        panic!("run opens");
    };
    assert!(run.process_records(&semantic("ex10", 2), &two_argument_bias()).is_ok());
    assert!(run.process_records(&semantic("ex1", 2), &two_argument_bias()).is_ok());
    let usage = format!("{SCIM}ex1_argument_1");
    assert!(run
        .store(ModuleId::DimaBias)
        .graph()
        .iter()
        .any(|t| t.predicate == dima::USES_TECHNIQUE && t.mentions(&usage)));

    let err = run.process_records(&semantic("ex1", 1), &two_argument_bias());
    let Err(ArticleError::Integrity(err)) = err else {
        panic!("argument_1 is gone from the influence-mini graph");
    };
    assert_eq!(err.iri, usage);

    let (scim_graph, dima_graph) = (
        persisted(&run, ModuleId::InfluenceMini),
        persisted(&run, ModuleId::DimaBias),
    );
    assert_eq!(dangling_usages(&scim_graph, &dima_graph), Vec::<String>::new());
    assert!(!dima_graph.iter().any(|t| t.mentions(&usage)));
    assert!(scim_graph.has_type(&format!("{SCIM}ex1_argument_0"), scim::ARGUMENT));
    assert!(dima_graph
        .iter()
        .any(|t| t.predicate == dima::USES_TECHNIQUE && t.mentions(&format!("{SCIM}ex10_argument_1"))));
}

#[test]
fn bias_for_an_unmapped_article_is_rejected() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let config = config_in(dir.path());
    let Ok(mut run) = MappingRun::with_record_directory(&config) else {
        panic!("run opens");
    };
    assert!(matches!(
        run.process_biases("ex3", &bias()),
        Err(ArticleError::Integrity(_))
    ));
    assert!(!config.storage.dima_graph.exists());
}
