//! End-to-end scenario: map article "ex1" from extractor records on disk,
//! reason over both persisted graphs and query the result.

mod common;

use std::thread;
use std::time::Duration;

use common::{config_in, map_records, write_records, DIMA, SCIM};
use dima_ontology::iris::{RDF_TYPE, XSD_INTEGER};
use dima_ontology::vocab::scim;
use dima_ontology::{Term, Triple};
use dima_pipeline::reasoner::local::run_with_timeout;
use dima_pipeline::reasoner::Provenance;
use dima_pipeline::{
    ArticleInput, ArticleState, FallbackPolicy, MappingRun, QueryError, QueryOutcome, QueryRun,
    ReasonerBridge, ReasonerError, ReasoningService, SessionError,
};

const PHASE_COUNT: &str = r##"
SELECT ?phase ?technique (COUNT(?usage) AS ?usages) WHERE {
  ?usage a dima:TechniqueUsage ;
         dima:instantiatesTechnique ?t .
  ?t dima:belongsToPhase ?p .
  BIND(STRAFTER(STR(?p), "#") AS ?phase)
  BIND(STRAFTER(STR(?t), "#") AS ?technique)
  FILTER(STRSTARTS(STR(?usage), "https://m82-project.org/dima-bias/ontology#ex1_"))
}
GROUP BY ?phase ?technique
"##;

fn quote() -> String {
    format!("{SCIM}ex1_quote_0")
}

fn mapped_ex1() -> (tempfile::TempDir, dima_pipeline::Config) {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let config = config_in(dir.path());
    map_records(&config, "ex1", 1);
    (dir, config)
}

// ============================================================================
// Mapping
// ============================================================================

#[test]
fn ex1_goes_from_records_to_persisted_graphs() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let config = config_in(dir.path());
    write_records(&config, "ex1", 1);

    let Ok(mut run) = MappingRun::with_record_directory(&config) else {
        panic!("mapping run opens");
    };
    let Ok(article) = ArticleInput::with_id("ex1", "Prices rose again.") else {
        panic!("ex1 is a valid id");
    };
    let report = match run.process(&article) {
        Ok(report) => report,
        Err(e) => panic!("ex1 should map: {e}"),
    };
    assert_eq!(report.state, ArticleState::Persisted);
    assert_eq!(report.influence_mini.removed, 0);
    assert!(report.influence_mini.inserted > 0);
    assert!(report.dima.inserted > 0);
    assert!(config.storage.influence_mini_graph.exists());
    assert!(config.storage.dima_graph.exists());
}

#[test]
fn batch_failures_are_per_article() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let config = config_in(dir.path());
    write_records(&config, "ex1", 1);
    let Ok(mut run) = MappingRun::with_record_directory(&config) else {
        panic!("mapping run opens");
    };
    let (Ok(ex1), Ok(ex2)) = (
        ArticleInput::with_id("ex1", "first"),
        ArticleInput::with_id("ex2", "second"),
    ) else {
        panic!("valid ids");
    };
    let report = run.process_batch(&[ex2, ex1]);
    assert_eq!(report.failure_count(), 1);
    assert!(report.results[0].is_failure());
    assert!(report.results[0].message.contains("features unavailable"));
    assert!(!report.results[1].is_failure());
}

// ============================================================================
// Reasoning and querying
// ============================================================================

#[test]
fn quote_query_returns_the_paraphrased_quote_once() {
    let (_dir, config) = mapped_ex1();
    let Ok(run) = QueryRun::open(&config) else {
        panic!("query run opens");
    };
    let Ok(outcome) = run.execute("SELECT ?q WHERE { ?q a scim:Quote }") else {
        panic!("query runs");
    };
    assert_eq!(
        outcome,
        QueryOutcome::Solutions {
            variables: vec!["q".to_owned()],
            rows: vec![vec![Some(Term::iri(quote()))]],
        }
    );

    let session = run.session();
    assert!(session.is_reasoned());
    assert_eq!(
        session.provenance(&Triple::iris(&quote(), RDF_TYPE, scim::QUOTE)),
        Some(Provenance::Inferred)
    );
    assert_eq!(
        session.provenance(&Triple::iris(&quote(), RDF_TYPE, &format!("{SCIM}ParaphrasedQuote"))),
        Some(Provenance::Asserted)
    );
}

#[test]
fn usages_group_by_phase_and_technique() {
    let (_dir, config) = mapped_ex1();
    let Ok(run) = QueryRun::open(&config) else {
        panic!("query run opens");
    };
    let Ok(QueryOutcome::Solutions { variables, rows }) = run.execute(PHASE_COUNT) else {
        panic!("phase count runs");
    };
    assert_eq!(variables, ["phase", "technique", "usages"]);
    assert_eq!(
        rows,
        vec![vec![
            Some(Term::string("Detect")),
            Some(Term::string("NegativityBias")),
            Some(Term::typed("1", XSD_INTEGER)),
        ]]
    );

    let usage = format!("{DIMA}ex1_negativitybias_0");
    let excerpts = format!("SELECT ?e WHERE {{ <{usage}> dima:hasExcerpt ?e }}");
    let Ok(outcome) = run.execute(&excerpts) else {
        panic!("excerpt query runs");
    };
    assert_eq!(outcome.len(), 2);
}

#[test]
fn inverse_of_has_quote_is_inferred() {
    let (_dir, config) = mapped_ex1();
    let Ok(run) = QueryRun::open(&config) else {
        panic!("query run opens");
    };
    let premise = format!("{SCIM}ex1_premise_0");
    assert_eq!(
        run.session()
            .provenance(&Triple::iris(&premise, scim::HAS_QUOTE, &quote())),
        Some(Provenance::Asserted)
    );
    assert_eq!(
        run.session()
            .provenance(&Triple::iris(&quote(), scim::IS_MENTIONED_IN, &premise)),
        Some(Provenance::Inferred)
    );
    let Ok(outcome) = run.execute("ASK { scim:ex1_quote_0 scim:isMentionedIn scim:ex1_premise_0 }")
    else {
        panic!("ask runs");
    };
    assert_eq!(outcome, QueryOutcome::Boolean(true));
}

#[test]
fn bad_queries_are_rejected_without_results() {
    let (_dir, config) = mapped_ex1();
    let Ok(run) = QueryRun::open(&config) else {
        panic!("query run opens");
    };
    assert!(matches!(
        run.execute("SELECT ?q WHERE { ?q a scim:Quote"),
        Err(SessionError::Query(QueryError::Syntax(_)))
    ));
    assert!(matches!(
        run.execute("SELECT ?q WHERE { ?q a scim:Rumour }"),
        Err(SessionError::Query(QueryError::UnresolvedTerm(iri))) if iri == format!("{SCIM}Rumour")
    ));
}

// ============================================================================
// Reasoner failure policy
// ============================================================================

/// Never answers within its own deadline.
struct Stalled;

impl ReasoningService for Stalled {
    fn name(&self) -> &str {
        "stalled"
    }

    fn entail(&self, _request: &str) -> Result<String, ReasonerError> {
        run_with_timeout(Duration::from_millis(50), || {
            thread::sleep(Duration::from_secs(2));
            String::new()
        })
    }
}

#[test]
fn reasoner_timeout_fails_the_query() {
    let (_dir, config) = mapped_ex1();
    let bridge = ReasonerBridge::new(Box::new(Stalled), FallbackPolicy::Fail);
    assert!(matches!(
        QueryRun::with_bridge(&config.storage, &bridge),
        Err(SessionError::Reasoner(ReasonerError::Timeout(_)))
    ));
}

#[test]
fn unreasoned_fallback_answers_from_asserted_triples() {
    let (_dir, config) = mapped_ex1();
    let bridge = ReasonerBridge::new(Box::new(Stalled), FallbackPolicy::Unreasoned);
    let Ok(run) = QueryRun::with_bridge(&config.storage, &bridge) else {
        panic!("fallback opens a session");
    };
    assert!(!run.session().is_reasoned());
    let quotes = run.execute("SELECT ?q WHERE { ?q a scim:Quote }");
    assert!(matches!(quotes, Ok(ref o) if o.is_empty()));
    let paraphrased = run.execute("SELECT ?q WHERE { ?q a scim:ParaphrasedQuote }");
    assert!(matches!(paraphrased, Ok(ref o) if o.len() == 1));
}
