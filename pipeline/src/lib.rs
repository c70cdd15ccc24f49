//! DIMA-OTK mapping and query pipeline.
//!
//! Turns extractor records into individuals of the two schema modules,
//! persists one Turtle graph per module, and answers SPARQL queries over
//! the reasoned union of both graphs.
//!
//! # Flows
//!
//! | Flow | Steps |
//! |------|-------|
//! | Mapping | [`extract`] → [`mapper`] → [`assembler`] (influence-mini) → [`linker`] → [`assembler`] (DIMA) |
//! | Query | [`assembler::load`] → [`reasoner`] → [`query`] |
//!
//! Each flow is driven by a run context from [`context`].
//!
//! # Entry Point
//!
//! ```no_run
//! use dima_pipeline::{Config, MappingRun, QueryRun};
//!
//! let config = Config::load(None)?;
//! let mut run = MappingRun::with_record_directory(&config)?;
//! let report = run.process_batch(&[]);
//! assert!(report.all_succeeded());
//!
//! let query = QueryRun::open(&config)?;
//! let outcome = query.execute("SELECT ?q WHERE { ?q a scim:Quote }")?;
//! println!("{} quotes", outcome.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::panic))]

pub mod article;
pub mod assembler;
pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod linker;
pub mod mapper;
pub mod query;
pub mod reasoner;
pub mod record;
pub mod report;

pub use article::ArticleInput;
pub use assembler::{CommitStats, ModuleStore};
pub use config::{Config, FallbackPolicy, ReasonerKind};
pub use context::{ArticleReport, ArticleState, MappingRun, QueryRun};
pub use error::{
    ArticleError, ConfigError, IntegrityError, MappingError, PersistenceError, QueryError,
    ReasonerError, SessionError, SetupError,
};
pub use extract::{FeatureSource, RecordDirectory};
pub use mapper::Abox;
pub use query::{QueryExecutor, QueryOutcome};
pub use reasoner::{ReasonerBridge, ReasoningService, ReasoningSession};
pub use record::{BiasRecord, SemanticRecord};
pub use report::{ArticleResult, BatchReport};
