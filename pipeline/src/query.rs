//! SPARQL query executor.
//!
//! Queries run against an in-memory `oxigraph` store filled from a
//! [`ReasoningSession`]: the closure in the default graph, the asserted and
//! inferred parts in two named graphs. The schema prefixes are declared
//! automatically unless the query declares them itself.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::sync::{Arc, OnceLock};

use dima_ontology::iris::{NS_DIMA, NS_SCIM};
use dima_ontology::serializer::ntriples::to_ntriples;
use dima_ontology::{Graph, Schema, Term, Triple};
use oxigraph::io::GraphFormat;
use oxigraph::model::{GraphNameRef, NamedNode, Subject};
use oxigraph::sparql::{Query, QueryResults};
use oxigraph::store::Store;
use regex::Regex;

use crate::article::validate_article_id;
use crate::error::QueryError;
use crate::reasoner::ReasoningSession;

/// Named graph holding the asserted triples.
pub const ASSERTED_GRAPH: &str = "urn:dima-otk:graph:asserted";

/// Named graph holding the inferred triples.
pub const INFERRED_GRAPH: &str = "urn:dima-otk:graph:inferred";

/// Prefixes declared for every query.
const QUERY_PREFIXES: [&str; 6] = ["scim", "dima", "rdf", "rdfs", "owl", "xsd"];

/// The result of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// SELECT bindings, one row per solution, columns in `variables` order.
    Solutions {
        /// Projected variable names, without `?`.
        variables: Vec<String>,
        /// Unbound variables are `None`.
        rows: Vec<Vec<Option<Term>>>,
    },
    /// ASK answer.
    Boolean(bool),
    /// CONSTRUCT or DESCRIBE result.
    Graph(Graph),
}

impl QueryOutcome {
    /// Number of rows, triples, or 1 for a boolean.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            QueryOutcome::Solutions { rows, .. } => rows.len(),
            QueryOutcome::Boolean(_) => 1,
            QueryOutcome::Graph(g) => g.len(),
        }
    }

    /// Returns true for an empty solution sequence or graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluates SPARQL 1.1 queries over reasoning sessions.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    schema: Arc<Schema>,
}

impl QueryExecutor {
    /// An executor resolving terms against `schema` and its imports.
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    /// Declares every standard prefix the query does not declare itself.
    ///
    /// The declarations share the query's first line, so line numbers in
    /// syntax diagnostics match the text the caller wrote.
    #[must_use]
    pub fn prepare(&self, query: &str) -> String {
        static DECLARED: OnceLock<Option<Regex>> = OnceLock::new();
        let declared: BTreeSet<String> = DECLARED
            .get_or_init(|| Regex::new(r"(?i)\bPREFIX\s+([A-Za-z][\w.-]*)?\s*:").ok())
            .as_ref()
            .map(|re| {
                re.captures_iter(query)
                    .map(|c| c.get(1).map_or("", |m| m.as_str()).to_owned())
                    .collect()
            })
            .unwrap_or_default();

        let mut prologue = String::new();
        for (prefix, ns) in self.schema.prefixes() {
            if QUERY_PREFIXES.contains(&prefix) && !declared.contains(prefix) {
                let _ = write!(prologue, "PREFIX {prefix}: <{ns}> ");
            }
        }
        prologue + query
    }

    /// Runs `query` against `session`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Syntax`] for malformed SPARQL,
    /// [`QueryError::UnresolvedTerm`] for a `scim:` or `dima:` term that is
    /// neither vocabulary nor present in the session, and
    /// [`QueryError::Evaluation`] if the engine fails.
    pub fn execute(&self, query: &str, session: &ReasoningSession) -> Result<QueryOutcome, QueryError> {
        let parsed = Query::parse(&self.prepare(query), None)
            .map_err(|e| QueryError::Syntax(e.to_string()))?;
        self.check_terms(&parsed, session)?;

        let store = load_session(session)?;
        let results = store
            .query(parsed)
            .map_err(|e| QueryError::Evaluation(e.to_string()))?;
        let outcome = match results {
            QueryResults::Solutions(solutions) => {
                let variables: Vec<String> = solutions
                    .variables()
                    .iter()
                    .map(|v| v.as_str().to_owned())
                    .collect();
                let mut rows = Vec::new();
                for solution in solutions {
                    let solution = solution.map_err(|e| QueryError::Evaluation(e.to_string()))?;
                    rows.push(
                        (0..variables.len())
                            .map(|i| solution.get(i).map(from_oxigraph))
                            .collect(),
                    );
                }
                QueryOutcome::Solutions { variables, rows }
            }
            QueryResults::Boolean(b) => QueryOutcome::Boolean(b),
            QueryResults::Graph(triples) => {
                let mut graph = Graph::new();
                for triple in triples {
                    let triple = triple.map_err(|e| QueryError::Evaluation(e.to_string()))?;
                    graph.insert(Triple::new(
                        subject_from_oxigraph(&triple.subject),
                        triple.predicate.as_str(),
                        from_oxigraph(&triple.object),
                    ));
                }
                QueryOutcome::Graph(graph)
            }
        };
        tracing::info!(results = outcome.len(), reasoned = session.is_reasoned(), "query evaluated");
        Ok(outcome)
    }

    fn check_terms(&self, parsed: &Query, session: &ReasoningSession) -> Result<(), QueryError> {
        static IRI: OnceLock<Option<Regex>> = OnceLock::new();
        let Some(re) = IRI.get_or_init(|| Regex::new(r"<([^<>\s]*)>").ok()) else {
            return Ok(());
        };
        let text = parsed.to_string();
        for iri in re.captures_iter(&text).filter_map(|c| c.get(1)).map(|m| m.as_str()) {
            let Some(local) = iri.strip_prefix(NS_SCIM).or_else(|| iri.strip_prefix(NS_DIMA)) else {
                continue;
            };
            // absent individuals just match nothing
            if is_individual_name(local) {
                continue;
            }
            if !self.schema.is_vocabulary(iri) && !session.mentions(iri) {
                return Err(QueryError::UnresolvedTerm(iri.to_owned()));
            }
        }
        Ok(())
    }
}

/// `<article>_<kind>_<ordinal>`, the shape of every minted individual.
fn is_individual_name(local: &str) -> bool {
    let mut parts = local.split('_');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(article), Some(kind), Some(ordinal), None) => {
            validate_article_id(article).is_ok()
                && !kind.is_empty()
                && !ordinal.is_empty()
                && ordinal.bytes().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

fn load_session(session: &ReasoningSession) -> Result<Store, QueryError> {
    let store = Store::new().map_err(|e| QueryError::Evaluation(e.to_string()))?;
    let asserted = NamedNode::new(ASSERTED_GRAPH).map_err(|e| QueryError::Evaluation(e.to_string()))?;
    let inferred = NamedNode::new(INFERRED_GRAPH).map_err(|e| QueryError::Evaluation(e.to_string()))?;
    let parts = [
        (session.closure(), GraphNameRef::DefaultGraph),
        (session.asserted(), GraphNameRef::NamedNode(asserted.as_ref())),
        (session.inferred(), GraphNameRef::NamedNode(inferred.as_ref())),
    ];
    for (graph, name) in parts {
        store
            .load_graph(to_ntriples(graph).as_bytes(), GraphFormat::NTriples, name, None)
            .map_err(|e| QueryError::Evaluation(e.to_string()))?;
    }
    Ok(store)
}

fn from_oxigraph(term: &oxigraph::model::Term) -> Term {
    use oxigraph::model::Term as Ox;
    match term {
        Ox::NamedNode(n) => Term::iri(n.as_str()),
        Ox::BlankNode(b) => Term::Blank(b.as_str().to_owned()),
        Ox::Literal(l) => match l.language() {
            Some(lang) => Term::lang_string(l.value(), lang),
            None => Term::typed(l.value(), l.datatype().as_str()),
        },
        #[allow(unreachable_patterns)]
        other => Term::string(other.to_string()),
    }
}

fn subject_from_oxigraph(subject: &Subject) -> Term {
    match subject {
        Subject::NamedNode(n) => Term::iri(n.as_str()),
        Subject::BlankNode(b) => Term::Blank(b.as_str().to_owned()),
        #[allow(unreachable_patterns)]
        other => Term::Blank(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FallbackPolicy;
    use crate::reasoner::{LocalReasoner, ReasonerBridge};
    use dima_ontology::iris::RDF_TYPE;
    use dima_ontology::vocab::scim;
    use dima_ontology::{registry, ModuleId};
    use std::time::Duration;

    const QUOTE: &str = "https://stratcomcoe.org/influence-mini/ontology#ex1_quote_0";
    const PARAPHRASED: &str = "https://stratcomcoe.org/influence-mini/ontology#ParaphrasedQuote";

    fn executor_and_session() -> (QueryExecutor, ReasoningSession) {
        let (Ok(scim_schema), Ok(dima_schema)) = (
            registry::load(ModuleId::InfluenceMini),
            registry::load(ModuleId::DimaBias),
        ) else {
            panic!("schemas load");
        };
        let mut g = scim_schema.tbox_graph();
        g.insert(Triple::iris(QUOTE, RDF_TYPE, PARAPHRASED));
        let bridge = ReasonerBridge::new(
            Box::new(LocalReasoner::new(Duration::from_secs(10))),
            FallbackPolicy::Fail,
        );
        let Ok(session) = bridge.open_session(&[&g]) else {
            panic!("reasoning succeeds");
        };
        (QueryExecutor::new(Arc::new(dima_schema)), session)
    }

    #[test]
    fn prefixes_are_declared_once() {
        let (executor, _) = executor_and_session();
        let prepared = executor.prepare("PREFIX scim: <urn:x#>\nASK {}");
        assert!(!prepared.contains(&format!("PREFIX scim: <{NS_SCIM}>")));
        assert!(prepared.contains(&format!("PREFIX dima: <{NS_DIMA}>")));
        assert!(prepared.contains("PREFIX xsd:"));
    }

    #[test]
    fn prologue_keeps_line_numbers() {
        let (executor, session) = executor_and_session();
        let query = "SELECT ?q\nWHERE {\n  ?q a scim:Quote\n}";
        let prepared = executor.prepare(query);
        assert_eq!(prepared.lines().count(), query.lines().count());
        assert!(prepared.lines().skip(1).eq(query.lines().skip(1)));
        assert!(matches!(
            executor.execute("SELECT ?q\nWHERE { ?q a ", &session),
            Err(QueryError::Syntax(_))
        ));
    }

    #[test]
    fn select_sees_inferred_supertype() {
        let (executor, session) = executor_and_session();
        let Ok(outcome) = executor.execute("SELECT ?q WHERE { ?q a scim:Quote }", &session) else {
            panic!("query runs");
        };
        assert_eq!(
            outcome,
            QueryOutcome::Solutions {
                variables: vec!["q".to_owned()],
                rows: vec![vec![Some(Term::iri(QUOTE))]],
            }
        );
    }

    #[test]
    fn named_graphs_separate_provenance() {
        let (executor, session) = executor_and_session();
        let ask = |graph: &str, class: &str| {
            let q = format!("ASK {{ GRAPH <{graph}> {{ <{QUOTE}> a <{class}> }} }}");
            executor.execute(&q, &session)
        };
        assert_eq!(ask(ASSERTED_GRAPH, PARAPHRASED), Ok(QueryOutcome::Boolean(true)));
        assert_eq!(ask(INFERRED_GRAPH, PARAPHRASED), Ok(QueryOutcome::Boolean(false)));
        assert_eq!(ask(INFERRED_GRAPH, scim::QUOTE), Ok(QueryOutcome::Boolean(true)));
    }

    #[test]
    fn construct_returns_a_graph() {
        let (executor, session) = executor_and_session();
        let Ok(QueryOutcome::Graph(g)) = executor.execute(
            "CONSTRUCT { ?q a scim:Quote } WHERE { ?q a scim:ParaphrasedQuote }",
            &session,
        ) else {
            panic!("construct runs");
        };
        assert_eq!(g.len(), 1);
        assert!(g.has_type(QUOTE, scim::QUOTE));
    }

    #[test]
    fn malformed_query_is_a_syntax_error() {
        let (executor, session) = executor_and_session();
        assert!(matches!(
            executor.execute("SELECT ?q WHERE { ?q a ", &session),
            Err(QueryError::Syntax(_))
        ));
    }

    #[test]
    fn unknown_schema_terms_are_rejected() {
        let (executor, session) = executor_and_session();
        assert_eq!(
            executor.execute("SELECT ?q WHERE { ?q a scim:Gossip }", &session),
            Err(QueryError::UnresolvedTerm(format!("{NS_SCIM}Gossip")))
        );
        assert_eq!(
            executor.execute("SELECT ?o WHERE { ?q dima:spreads ?o }", &session),
            Err(QueryError::UnresolvedTerm(format!("{NS_DIMA}spreads")))
        );
    }

    #[test]
    fn absent_individuals_match_nothing() {
        let (executor, session) = executor_and_session();
        assert_eq!(
            executor.execute("ASK { scim:ex2_quote_0 a scim:Quote }", &session),
            Ok(QueryOutcome::Boolean(false))
        );
        assert_eq!(
            executor.execute("SELECT ?p WHERE { dima:ex2_negativitybias_0 ?p ?o }", &session),
            Ok(QueryOutcome::Solutions {
                variables: vec!["p".to_owned()],
                rows: Vec::new(),
            })
        );
        assert_eq!(
            executor.execute("ASK { scim:ex1_quote_0 a scim:Quote }", &session),
            Ok(QueryOutcome::Boolean(true))
        );
    }
}
