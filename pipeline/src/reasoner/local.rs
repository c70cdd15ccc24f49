//! In-process reasoning service.
//!
//! Computes a forward-chaining closure under the RDFS and OWL rules the two
//! schemas rely on:
//!
//! | Rule | Premises | Conclusion |
//! |------|----------|------------|
//! | subclass transitivity | `A ⊑ B`, `B ⊑ C` | `A ⊑ C` |
//! | type propagation | `x a A`, `A ⊑ B` | `x a B` |
//! | subproperty | `s p o`, `p ⊑ q` | `s q o` |
//! | inverse | `s p o`, `p inverseOf q` | `o q s` (both directions) |
//! | symmetric | `s p o`, `p` symmetric | `o p s` |
//! | transitive | `s p o`, `o p z`, `p` transitive | `s p z` |
//! | domain | `s p o`, `p domain C` | `s a C` |
//! | range | `s p o`, `p range C`, `o` a resource | `o a C` |
//!
//! The closure runs on a worker thread and is abandoned after the
//! configured timeout.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::mpsc;
use std::time::Duration;

use dima_ontology::iris::{
    OWL_INVERSE_OF, OWL_SYMMETRIC_PROPERTY, OWL_TRANSITIVE_PROPERTY, RDFS_DOMAIN, RDFS_RANGE,
    RDFS_SUBCLASS_OF, RDFS_SUBPROPERTY_OF, RDF_TYPE,
};
use dima_ontology::parse::parse_ntriples;
use dima_ontology::serializer::ntriples::to_ntriples;
use dima_ontology::{Graph, Term, Triple};

use super::ReasoningService;
use crate::error::ReasonerError;

/// Rule-closure reasoner with a bounded running time.
#[derive(Debug, Clone)]
pub struct LocalReasoner {
    timeout: Duration,
}

impl LocalReasoner {
    /// A reasoner that gives up after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl ReasoningService for LocalReasoner {
    fn name(&self) -> &str {
        "local"
    }

    fn entail(&self, request: &str) -> Result<String, ReasonerError> {
        let graph = parse_ntriples(request)
            .map_err(|e| ReasonerError::Unavailable(format!("invalid request: {e}")))?;
        let closure = run_with_timeout(self.timeout, move || entailment_closure(&graph))?;
        Ok(to_ntriples(&closure))
    }
}

/// Runs `job` on a worker thread and waits at most `timeout` for it.
///
/// The worker is detached on timeout; its result is dropped when it finishes.
///
/// # Errors
///
/// Returns [`ReasonerError::Timeout`] if `job` does not finish in time, or
/// [`ReasonerError::Unavailable`] if the worker cannot start or dies.
pub fn run_with_timeout<T, F>(timeout: Duration, job: F) -> Result<T, ReasonerError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    std::thread::Builder::new()
        .name("dima-reasoner".to_owned())
        .spawn(move || {
            let _ = tx.send(job());
        })
        .map_err(|e| ReasonerError::Unavailable(e.to_string()))?;
    match rx.recv_timeout(timeout) {
        Ok(value) => Ok(value),
        Err(mpsc::RecvTimeoutError::Timeout) => Err(ReasonerError::Timeout(timeout)),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(ReasonerError::Unavailable(
            "reasoner worker exited without a result".to_owned(),
        )),
    }
}

/// The graph's terminology, indexed for rule application.
#[derive(Default)]
struct Rules {
    subclass: BTreeMap<String, BTreeSet<String>>,
    subproperty: BTreeMap<String, BTreeSet<String>>,
    inverse: BTreeMap<String, BTreeSet<String>>,
    symmetric: BTreeSet<String>,
    transitive: BTreeSet<String>,
    domain: BTreeMap<String, BTreeSet<String>>,
    range: BTreeMap<String, BTreeSet<String>>,
}

impl Rules {
    fn read(graph: &Graph) -> Self {
        let mut rules = Rules::default();
        for t in graph {
            let (Some(s), Some(o)) = (t.subject.as_iri(), t.object.as_iri()) else {
                continue;
            };
            let (s, o) = (s.to_owned(), o.to_owned());
            match t.predicate.as_str() {
                RDFS_SUBCLASS_OF => {
                    rules.subclass.entry(s).or_default().insert(o);
                }
                RDFS_SUBPROPERTY_OF => {
                    rules.subproperty.entry(s).or_default().insert(o);
                }
                OWL_INVERSE_OF => {
                    rules.inverse.entry(s.clone()).or_default().insert(o.clone());
                    rules.inverse.entry(o).or_default().insert(s);
                }
                RDFS_DOMAIN => {
                    rules.domain.entry(s).or_default().insert(o);
                }
                RDFS_RANGE => {
                    rules.range.entry(s).or_default().insert(o);
                }
                RDF_TYPE if o == OWL_SYMMETRIC_PROPERTY => {
                    rules.symmetric.insert(s);
                }
                RDF_TYPE if o == OWL_TRANSITIVE_PROPERTY => {
                    rules.transitive.insert(s);
                }
                _ => {}
            }
        }
        rules
    }
}

fn is_resource(term: &Term) -> bool {
    matches!(term, Term::Iri(_) | Term::Blank(_))
}

fn targets<'a>(
    map: &'a BTreeMap<String, BTreeSet<String>>,
    key: &str,
) -> impl Iterator<Item = &'a String> {
    map.get(key).into_iter().flatten()
}

/// One round of every rule over `graph`; returns only new triples.
fn step(graph: &Graph) -> Vec<Triple> {
    let rules = Rules::read(graph);
    let mut out = Vec::new();
    let mut push = |t: Triple| {
        if !graph.contains(&t) {
            out.push(t);
        }
    };

    for (sub, parents) in &rules.subclass {
        for mid in parents {
            for sup in targets(&rules.subclass, mid) {
                push(Triple::iris(sub, RDFS_SUBCLASS_OF, sup));
            }
        }
    }
    for (sub, parents) in &rules.subproperty {
        for mid in parents {
            for sup in targets(&rules.subproperty, mid) {
                push(Triple::iris(sub, RDFS_SUBPROPERTY_OF, sup));
            }
        }
    }

    let mut by_subject: BTreeMap<(&Term, &str), Vec<&Term>> = BTreeMap::new();
    for t in graph {
        if rules.transitive.contains(&t.predicate) {
            by_subject
                .entry((&t.subject, t.predicate.as_str()))
                .or_default()
                .push(&t.object);
        }
    }

    for t in graph {
        let p = t.predicate.as_str();
        if p == RDF_TYPE {
            if let Some(class) = t.object.as_iri() {
                for sup in targets(&rules.subclass, class) {
                    push(Triple::new(t.subject.clone(), RDF_TYPE, Term::iri(sup)));
                }
            }
        }
        for sup in targets(&rules.subproperty, p) {
            push(Triple::new(t.subject.clone(), sup.clone(), t.object.clone()));
        }
        if is_resource(&t.object) {
            for inv in targets(&rules.inverse, p) {
                push(Triple::new(t.object.clone(), inv.clone(), t.subject.clone()));
            }
            if rules.symmetric.contains(p) {
                push(Triple::new(t.object.clone(), p, t.subject.clone()));
            }
            for class in targets(&rules.range, p) {
                push(Triple::new(t.object.clone(), RDF_TYPE, Term::iri(class)));
            }
            if rules.transitive.contains(p) {
                for next in by_subject.get(&(&t.object, p)).into_iter().flatten() {
                    push(Triple::new(t.subject.clone(), p, (*next).clone()));
                }
            }
        }
        for class in targets(&rules.domain, p) {
            push(Triple::new(t.subject.clone(), RDF_TYPE, Term::iri(class)));
        }
    }
    out
}

/// Applies every rule until no new triple appears.
#[must_use]
pub fn entailment_closure(graph: &Graph) -> Graph {
    let mut closure = graph.clone();
    let mut rounds = 0usize;
    loop {
        let derived = step(&closure);
        if derived.is_empty() {
            break;
        }
        rounds += 1;
        Extend::extend(&mut closure, derived);
    }
    tracing::debug!(
        rounds,
        asserted = graph.len(),
        entailed = closure.len(),
        "local closure reached fixpoint"
    );
    closure
}

#[cfg(test)]
mod tests {
    use super::*;

    const EX: &str = "https://example.org/";

    fn iri(local: &str) -> String {
        format!("{EX}{local}")
    }

    fn t(s: &str, p: &str, o: &str) -> Triple {
        Triple::iris(&iri(s), p, &iri(o))
    }

    #[test]
    fn subclass_chain_types_instances() {
        let g: Graph = [
            t("Paraphrased", RDFS_SUBCLASS_OF, "Quote"),
            t("Quote", RDFS_SUBCLASS_OF, "Span"),
            t("q0", RDF_TYPE, "Paraphrased"),
        ]
        .into_iter()
        .collect();
        let c = entailment_closure(&g);
        assert!(c.contains(&t("q0", RDF_TYPE, "Quote")));
        assert!(c.contains(&t("q0", RDF_TYPE, "Span")));
        assert!(c.contains(&t("Paraphrased", RDFS_SUBCLASS_OF, "Span")));
    }

    #[test]
    fn inverse_holds_in_both_directions() {
        let g: Graph = [
            t("hasQuote", OWL_INVERSE_OF, "isMentionedIn"),
            t("premise", &iri("hasQuote"), "quote"),
            t("quote2", &iri("isMentionedIn"), "premise2"),
        ]
        .into_iter()
        .collect();
        let c = entailment_closure(&g);
        assert!(c.contains(&t("quote", &iri("isMentionedIn"), "premise")));
        assert!(c.contains(&t("premise2", &iri("hasQuote"), "quote2")));
    }

    #[test]
    fn subproperty_domain_and_range() {
        let g: Graph = [
            t("hasPremise", RDFS_SUBPROPERTY_OF, "hasComponent"),
            t("hasComponent", RDFS_DOMAIN, "Argument"),
            t("hasComponent", RDFS_RANGE, "Component"),
            t("a0", &iri("hasPremise"), "p0"),
            Triple::new(Term::iri(iri("p0")), iri("hasComponent"), Term::string("text")),
        ]
        .into_iter()
        .collect();
        let c = entailment_closure(&g);
        assert!(c.contains(&t("a0", &iri("hasComponent"), "p0")));
        assert!(c.contains(&t("a0", RDF_TYPE, "Argument")));
        assert!(c.contains(&t("p0", RDF_TYPE, "Component")));
        assert!(!c.iter().any(|tr| tr.subject.as_literal().is_some()));
    }

    #[test]
    fn symmetric_and_transitive_properties() {
        let g: Graph = [
            Triple::iris(&iri("near"), RDF_TYPE, OWL_SYMMETRIC_PROPERTY),
            Triple::iris(&iri("partOf"), RDF_TYPE, OWL_TRANSITIVE_PROPERTY),
            t("a", &iri("near"), "b"),
            t("x", &iri("partOf"), "y"),
            t("y", &iri("partOf"), "z"),
            t("z", &iri("partOf"), "w"),
        ]
        .into_iter()
        .collect();
        let c = entailment_closure(&g);
        assert!(c.contains(&t("b", &iri("near"), "a")));
        assert!(c.contains(&t("x", &iri("partOf"), "w")));
    }

    #[test]
    fn closure_is_idempotent() {
        let g: Graph = [
            t("A", RDFS_SUBCLASS_OF, "B"),
            t("x", RDF_TYPE, "A"),
        ]
        .into_iter()
        .collect();
        let once = entailment_closure(&g);
        assert_eq!(entailment_closure(&once), once);
    }

    #[test]
    fn slow_jobs_time_out() {
        let result = run_with_timeout(Duration::from_millis(10), || {
            std::thread::sleep(Duration::from_millis(500));
            1
        });
        assert_eq!(result, Err(ReasonerError::Timeout(Duration::from_millis(10))));
        assert_eq!(run_with_timeout(Duration::from_secs(5), || 2), Ok(2));
    }

    #[test]
    fn service_round_trips_n_triples() {
        let reasoner = LocalReasoner::new(Duration::from_secs(5));
        let request = to_ntriples(
            &[t("A", RDFS_SUBCLASS_OF, "B"), t("x", RDF_TYPE, "A")]
                .into_iter()
                .collect(),
        );
        let Ok(response) = reasoner.entail(&request) else {
            panic!("local entailment should succeed");
        };
        assert!(response.contains("<https://example.org/x> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <https://example.org/B> ."));
        assert!(matches!(
            reasoner.entail("garbage"),
            Err(ReasonerError::Unavailable(_))
        ));
    }
}
