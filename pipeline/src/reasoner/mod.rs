//! Reasoner bridge.
//!
//! The two persisted module graphs are merged in memory, serialized as
//! N-Triples and handed to a [`ReasoningService`]. The entailed triples it
//! returns, minus the asserted ones, become the inferred part of a
//! [`ReasoningSession`]. Sessions are read-only and never written back.

pub mod http;
pub mod local;

use std::collections::BTreeSet;

use dima_ontology::parse::parse_ntriples;
use dima_ontology::serializer::ntriples::to_ntriples;
use dima_ontology::{Graph, Triple};

use crate::config::{FallbackPolicy, ReasonerConfig, ReasonerKind};
use crate::error::{ConfigError, ReasonerError};

pub use http::HttpReasoner;
pub use local::LocalReasoner;

/// A black-box entailment service.
///
/// The request is the N-Triples serialization of the asserted graph; the
/// response is the entailed triple set, also as N-Triples.
pub trait ReasoningService: Send + Sync {
    /// Short name for log lines.
    fn name(&self) -> &str;

    /// Computes the entailments of `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ReasonerError`] on timeout, transport failure or a
    /// non-success answer.
    fn entail(&self, request: &str) -> Result<String, ReasonerError>;
}

/// Where a session triple comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Present in a persisted graph.
    Asserted,
    /// Derived by the reasoner.
    Inferred,
}

/// Asserted and inferred triples for the length of one query invocation.
#[derive(Debug, Clone)]
pub struct ReasoningSession {
    asserted: Graph,
    inferred: Graph,
    closure: Graph,
    iris: BTreeSet<String>,
    reasoned: bool,
}

impl ReasoningSession {
    fn new(asserted: Graph, inferred: Graph, reasoned: bool) -> Self {
        let mut closure = asserted.clone();
        closure.extend(&inferred);
        let mut iris = BTreeSet::new();
        for t in &closure {
            iris.insert(t.predicate.clone());
            for term in [&t.subject, &t.object] {
                if let Some(iri) = term.as_iri() {
                    iris.insert(iri.to_owned());
                }
            }
        }
        Self {
            asserted,
            inferred,
            closure,
            iris,
            reasoned,
        }
    }

    /// A session over `asserted` with no reasoning applied.
    #[must_use]
    pub fn unreasoned(asserted: Graph) -> Self {
        Self::new(asserted, Graph::new(), false)
    }

    /// Triples of the persisted graphs.
    #[must_use]
    pub fn asserted(&self) -> &Graph {
        &self.asserted
    }

    /// Triples only the reasoner produced.
    #[must_use]
    pub fn inferred(&self) -> &Graph {
        &self.inferred
    }

    /// Asserted and inferred triples together.
    #[must_use]
    pub fn closure(&self) -> &Graph {
        &self.closure
    }

    /// False when the reasoner failed and the `unreasoned` policy applied.
    #[must_use]
    pub fn is_reasoned(&self) -> bool {
        self.reasoned
    }

    /// Whether `triple` was asserted or inferred, if it holds at all.
    #[must_use]
    pub fn provenance(&self, triple: &Triple) -> Option<Provenance> {
        if self.asserted.contains(triple) {
            Some(Provenance::Asserted)
        } else if self.inferred.contains(triple) {
            Some(Provenance::Inferred)
        } else {
            None
        }
    }

    /// Returns true if `iri` occurs anywhere in the closure.
    #[must_use]
    pub fn mentions(&self, iri: &str) -> bool {
        self.iris.contains(iri)
    }
}

/// Submits graphs to a reasoning service under a fallback policy.
pub struct ReasonerBridge {
    service: Box<dyn ReasoningService>,
    policy: FallbackPolicy,
}

impl std::fmt::Debug for ReasonerBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReasonerBridge")
            .field("service", &self.service.name())
            .field("policy", &self.policy)
            .finish()
    }
}

impl ReasonerBridge {
    /// Wraps `service`.
    pub fn new(service: Box<dyn ReasoningService>, policy: FallbackPolicy) -> Self {
        Self { service, policy }
    }

    /// Builds the service the configuration names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `http` is selected without an
    /// endpoint or the HTTP client cannot be built.
    pub fn from_config(config: &ReasonerConfig) -> Result<Self, ConfigError> {
        let service: Box<dyn ReasoningService> = match config.kind {
            ReasonerKind::Local => Box::new(LocalReasoner::new(config.timeout())),
            ReasonerKind::Http => {
                let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                    ConfigError::Invalid("reasoner.endpoint is not set".to_owned())
                })?;
                let reasoner = HttpReasoner::new(endpoint, config.timeout())
                    .map_err(|e| ConfigError::Invalid(e.to_string()))?;
                Box::new(reasoner)
            }
        };
        Ok(Self::new(service, config.on_failure))
    }

    /// The fallback policy in force.
    #[must_use]
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Merges `graphs` and reasons over the union.
    ///
    /// # Errors
    ///
    /// Returns [`ReasonerError`] if the service fails and the policy is
    /// [`FallbackPolicy::Fail`].
    pub fn open_session(&self, graphs: &[&Graph]) -> Result<ReasoningSession, ReasonerError> {
        let mut asserted = Graph::new();
        for g in graphs {
            asserted.extend(g);
        }
        tracing::info!(
            service = self.service.name(),
            triples = asserted.len(),
            "submitting union graph to reasoner"
        );

        let entailed = self
            .service
            .entail(&to_ntriples(&asserted))
            .and_then(|body| parse_ntriples(&body).map_err(ReasonerError::MalformedResponse));
        match entailed {
            Ok(entailed) => {
                let inferred: Graph = entailed
                    .iter()
                    .filter(|t| !asserted.contains(t))
                    .cloned()
                    .collect();
                tracing::info!(inferred = inferred.len(), "reasoning complete");
                Ok(ReasoningSession::new(asserted, inferred, true))
            }
            Err(e) if self.policy == FallbackPolicy::Unreasoned => {
                tracing::warn!(error = %e, "reasoner failed, answering over asserted triples only");
                Ok(ReasoningSession::unreasoned(asserted))
            }
            Err(e) => Err(e),
        }
    }
}
