//! Error types for the mapping and query flows.
//!
//! Every error is scoped to one unit of work: a mapping error aborts one
//! article, a reasoner or query error aborts one query. Nothing here is
//! fatal to the process except a [`SetupError`], raised before any work
//! starts.

use std::path::PathBuf;
use std::time::Duration;

use dima_ontology::{ModuleId, ParseError, SchemaError};
use thiserror::Error;

use crate::context::ArticleState;

/// A structured record that is malformed or internally inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Article ids must be non-empty ASCII letters, digits and `-`.
    #[error("invalid article id {0:?}")]
    InvalidArticleId(String),
    /// A record-local id does not have the `<kind>_<ordinal>` shape of its kind.
    #[error("malformed id {id:?}: expected {expected}_<n>")]
    MalformedId {
        /// The offending id.
        id: String,
        /// The kind the id should carry.
        expected: &'static str,
    },
    /// The same id is declared twice.
    #[error("duplicate {kind} id {id:?}")]
    Duplicate {
        /// Entity kind (`motif`, `argument`, ...).
        kind: &'static str,
        /// The repeated id.
        id: String,
    },
    /// An entity refers to an id the record does not declare.
    #[error("{owner} refers to missing {kind} {id:?}")]
    MissingReference {
        /// The referring entity.
        owner: String,
        /// Kind of the missing target.
        kind: &'static str,
        /// The missing id.
        id: String,
    },
    /// A component id shared between arguments carries different text.
    #[error("component {id:?} is reused with different text")]
    ConflictingComponent {
        /// The component id.
        id: String,
    },
    /// A bias record names a phase the schema does not define.
    #[error("unknown cognitive phase {0:?}")]
    UnknownPhase(String),
    /// A bias record names a technique the schema does not define.
    #[error("unknown technique {technique:?} under phase {phase:?}")]
    UnknownTechnique {
        /// Phase key in the record.
        phase: String,
        /// Technique key in the record.
        technique: String,
    },
    /// A technique is listed under a phase it does not belong to.
    #[error("technique {technique} belongs to phase {expected}, not {found}")]
    WrongPhase {
        /// The technique.
        technique: String,
        /// Its phase in the schema.
        expected: String,
        /// The phase the record listed it under.
        found: String,
    },
    /// The record's article id differs from the article being processed.
    #[error("record is for article {found}, expected {expected}")]
    ArticleMismatch {
        /// The article being processed.
        expected: String,
        /// The id carried by the record.
        found: String,
    },
    /// The feature extractor could not supply a record.
    #[error("features unavailable for article {article}: {reason}")]
    FeaturesUnavailable {
        /// The article.
        article: String,
        /// What went wrong.
        reason: String,
    },
    /// The record was mapped against the wrong schema module.
    #[error("record mapped against {found}, expected {expected}")]
    WrongModule {
        /// The module the mapping needs.
        expected: ModuleId,
        /// The module supplied.
        found: ModuleId,
    },
    /// An article was driven through an illegal state transition.
    #[error("article {article}: illegal transition {from:?} -> {to:?}")]
    State {
        /// The article.
        article: String,
        /// Current state.
        from: ArticleState,
        /// Requested state.
        to: ArticleState,
    },
    /// The record is not valid JSON of the expected shape.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

/// A bias assertion targets an individual the influence-mini graph lacks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("article {article}: {iri} is not a persisted {expected} individual")]
pub struct IntegrityError {
    /// The article being linked.
    pub article: String,
    /// The unresolved individual.
    pub iri: String,
    /// The class it was expected to have.
    pub expected: String,
}

/// A graph file could not be read, parsed or written.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading the file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid Turtle.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// The file.
        path: PathBuf,
        /// Parser diagnostic.
        #[source]
        source: ParseError,
    },
    /// Writing or renaming the file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A graph the flow requires has not been persisted yet.
    #[error("graph file {} does not exist", path.display())]
    Missing {
        /// The expected file.
        path: PathBuf,
    },
}

/// The reasoning service failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReasonerError {
    /// No answer within the configured bound.
    #[error("reasoner timed out after {0:?}")]
    Timeout(Duration),
    /// The service could not be reached.
    #[error("reasoner unavailable: {0}")]
    Unavailable(String),
    /// The service answered with a non-success status.
    #[error("reasoner returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },
    /// The service answered with something that is not N-Triples.
    #[error("reasoner response is not N-Triples: {0}")]
    MalformedResponse(#[source] ParseError),
}

/// A query that cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query does not parse.
    #[error("query syntax error: {0}")]
    Syntax(String),
    /// The query names a schema-namespace term that exists nowhere.
    #[error("unresolvable term {0}")]
    UnresolvedTerm(String),
    /// The engine failed while loading or evaluating.
    #[error("query evaluation failed: {0}")]
    Evaluation(String),
}

/// The configuration file is unreadable or inconsistent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// The file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML of the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A field combination makes no sense.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failure while opening a mapping or query run.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Bad configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A schema module failed to load.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// A persisted graph could not be loaded.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Everything that can abort the processing of one article.
#[derive(Debug, Error)]
pub enum ArticleError {
    /// Record-level problem.
    #[error(transparent)]
    Mapping(#[from] MappingError),
    /// Cross-module reference problem.
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
    /// Graph file problem.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Everything that can abort one query.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The persisted graphs or the configuration could not be loaded.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// The reasoning call failed under the `fail` policy.
    #[error(transparent)]
    Reasoner(#[from] ReasonerError),
    /// The query itself failed.
    #[error(transparent)]
    Query(#[from] QueryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = MappingError::MissingReference {
            owner: "quote_0".into(),
            kind: "agent",
            id: "agent_9".into(),
        };
        assert_eq!(err.to_string(), "quote_0 refers to missing agent \"agent_9\"");

        let err = IntegrityError {
            article: "ex1".into(),
            iri: "https://stratcomcoe.org/influence-mini/ontology#ex1_argument_7".into(),
            expected: "https://stratcomcoe.org/influence-mini/ontology#Argument".into(),
        };
        assert!(err.to_string().contains("ex1_argument_7"));
    }

    #[test]
    fn article_error_wraps_transparently() {
        let err: ArticleError = MappingError::UnknownPhase("Sleep".into()).into();
        assert_eq!(err.to_string(), "unknown cognitive phase \"Sleep\"");
    }
}
