//! Run contexts.
//!
//! A [`MappingRun`] owns both module stores and the feature source for one
//! mapping invocation; a [`QueryRun`] owns one reasoning session and the
//! executor that queries it. Nothing is shared between runs.

use std::sync::Arc;

use dima_ontology::{registry, Graph, ModuleId, Schema};

use crate::article::ArticleInput;
use crate::assembler::{self, CommitStats, ModuleStore};
use crate::config::{Config, StorageConfig};
use crate::error::{ArticleError, MappingError, PersistenceError, SessionError, SetupError};
use crate::extract::{FeatureSource, RecordDirectory};
use crate::linker;
use crate::mapper::{map_biases, map_semantic};
use crate::query::{QueryExecutor, QueryOutcome};
use crate::reasoner::{ReasonerBridge, ReasoningSession};
use crate::record::{BiasRecord, SemanticRecord};
use crate::report::{ArticleResult, BatchReport};

/// Where one article is in the mapping flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArticleState {
    /// Nothing done yet.
    NotProcessed,
    /// The narrative record is available.
    FeaturesExtracted,
    /// The bias record is available.
    BiasAnnotated,
    /// The influence-mini individuals are persisted.
    MappedSchema1,
    /// The DIMA individuals are linked and assembled.
    MappedSchema2,
    /// Both graphs are on disk. Terminal.
    Persisted,
}

impl ArticleState {
    /// The only state reachable from `self`, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            ArticleState::NotProcessed => Some(ArticleState::FeaturesExtracted),
            ArticleState::FeaturesExtracted => Some(ArticleState::BiasAnnotated),
            ArticleState::BiasAnnotated => Some(ArticleState::MappedSchema1),
            ArticleState::MappedSchema1 => Some(ArticleState::MappedSchema2),
            ArticleState::MappedSchema2 => Some(ArticleState::Persisted),
            ArticleState::Persisted => None,
        }
    }
}

/// Tracks one article through [`ArticleState`].
#[derive(Debug, Clone)]
pub struct ArticleProgress {
    article: String,
    state: ArticleState,
}

impl ArticleProgress {
    /// A fresh article.
    pub fn new(article: impl Into<String>) -> Self {
        Self {
            article: article.into(),
            state: ArticleState::NotProcessed,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ArticleState {
        self.state
    }

    /// Moves to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::State`] unless `to` directly follows the
    /// current state.
    pub fn advance(&mut self, to: ArticleState) -> Result<(), MappingError> {
        if self.state.next() != Some(to) {
            return Err(MappingError::State {
                article: self.article.clone(),
                from: self.state,
                to,
            });
        }
        tracing::debug!(article = %self.article, state = ?to, "article advanced");
        self.state = to;
        Ok(())
    }
}

/// What processing one article changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleReport {
    /// Article id.
    pub article_id: String,
    /// Changes to the influence-mini graph.
    pub influence_mini: CommitStats,
    /// Changes to the DIMA graph.
    pub dima: CommitStats,
    /// Final state, [`ArticleState::Persisted`] on success.
    pub state: ArticleState,
}

/// One mapping invocation.
pub struct MappingRun {
    scim: ModuleStore,
    dima: ModuleStore,
    features: Box<dyn FeatureSource>,
}

impl std::fmt::Debug for MappingRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingRun")
            .field("scim", &self.scim.path())
            .field("dima", &self.dima.path())
            .finish_non_exhaustive()
    }
}

fn load_schemas() -> Result<(Arc<Schema>, Arc<Schema>), SetupError> {
    let scim = registry::load(ModuleId::InfluenceMini)?;
    let dima = registry::load(ModuleId::DimaBias)?;
    Ok((Arc::new(scim), Arc::new(dima)))
}

impl MappingRun {
    /// Loads both schemas and opens both module stores.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] on an invalid configuration, a bad schema or an
    /// unreadable persisted graph.
    pub fn open(config: &Config, features: Box<dyn FeatureSource>) -> Result<Self, SetupError> {
        config.validate()?;
        let (scim_schema, dima_schema) = load_schemas()?;
        let storage = &config.storage;
        Ok(Self {
            scim: ModuleStore::open(scim_schema, storage.graph_path(ModuleId::InfluenceMini))?,
            dima: ModuleStore::open(dima_schema, storage.graph_path(ModuleId::DimaBias))?,
            features,
        })
    }

    /// Opens a run that reads extractor records from the configured directories.
    ///
    /// # Errors
    ///
    /// Same as [`MappingRun::open`].
    pub fn with_record_directory(config: &Config) -> Result<Self, SetupError> {
        let records = RecordDirectory::new(
            config.storage.semantic_records.clone(),
            config.storage.bias_records.clone(),
        );
        Self::open(config, Box::new(records))
    }

    /// The store of `module`.
    #[must_use]
    pub fn store(&self, module: ModuleId) -> &ModuleStore {
        match module {
            ModuleId::InfluenceMini => &self.scim,
            ModuleId::DimaBias => &self.dima,
        }
    }

    /// Extracts, maps, links and persists one article.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError`]; the graphs keep whatever was committed
    /// before the failing step. When linking fails after the influence-mini
    /// commit, the article's DIMA individuals are withdrawn.
    pub fn process(&mut self, article: &ArticleInput) -> Result<ArticleReport, ArticleError> {
        tracing::info!(article = %article.id, "processing article");
        let mut progress = ArticleProgress::new(&article.id);
        let semantic = self.features.semantic_record(article)?;
        progress.advance(ArticleState::FeaturesExtracted)?;
        let bias = self.features.bias_record(&semantic)?;
        progress.advance(ArticleState::BiasAnnotated)?;
        self.assemble(progress, &semantic, &bias)
    }

    /// Maps, links and persists records that were extracted earlier.
    ///
    /// # Errors
    ///
    /// Same as [`MappingRun::process`].
    pub fn process_records(
        &mut self,
        semantic: &SemanticRecord,
        bias: &BiasRecord,
    ) -> Result<ArticleReport, ArticleError> {
        tracing::info!(article = %semantic.article_id, "processing records");
        let mut progress = ArticleProgress::new(&semantic.article_id);
        progress.advance(ArticleState::FeaturesExtracted)?;
        progress.advance(ArticleState::BiasAnnotated)?;
        self.assemble(progress, semantic, bias)
    }

    /// Maps and links a bias record against the already persisted
    /// influence-mini graph, then persists it. The influence-mini graph is
    /// never modified.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Integrity`] if the record refers to an
    /// individual the influence-mini graph does not hold.
    pub fn process_biases(
        &mut self,
        article_id: &str,
        bias: &BiasRecord,
    ) -> Result<CommitStats, ArticleError> {
        let abox = map_biases(self.dima.schema(), article_id, bias)?;
        linker::check(&abox, self.scim.graph(), self.dima.schema())?;
        Ok(self.dima.commit_article(&abox)?)
    }

    /// Processes `articles` in order. A failure aborts only that article.
    pub fn process_batch(&mut self, articles: &[ArticleInput]) -> BatchReport {
        let mut report = BatchReport::new();
        for article in articles {
            let result = match self.process(article) {
                Ok(done) => ArticleResult::persisted(
                    &article.id,
                    format!(
                        "{} influence-mini and {} dima triples",
                        done.influence_mini.inserted, done.dima.inserted
                    ),
                ),
                Err(e) => {
                    tracing::error!(article = %article.id, error = %e, "article aborted");
                    ArticleResult::failed(&article.id, e.to_string())
                }
            };
            report.push(result.with_source(article.source.clone()));
        }
        tracing::info!(
            articles = report.results.len(),
            failed = report.failure_count(),
            "batch finished"
        );
        report
    }

    fn assemble(
        &mut self,
        mut progress: ArticleProgress,
        semantic: &SemanticRecord,
        bias: &BiasRecord,
    ) -> Result<ArticleReport, ArticleError> {
        let scim_abox = map_semantic(self.scim.schema(), semantic)?;
        let dima_abox = map_biases(self.dima.schema(), &semantic.article_id, bias)?;

        let influence_mini = self.scim.commit_article(&scim_abox)?;
        progress.advance(ArticleState::MappedSchema1)?;

        if let Err(err) = linker::check(&dima_abox, self.scim.graph(), self.dima.schema()) {
            // the old usages may point at individuals the commit above removed
            let removed = self.dima.withdraw_article(&semantic.article_id)?;
            tracing::warn!(
                article = %semantic.article_id,
                iri = %err.iri,
                removed,
                "link failed, stale dima individuals withdrawn"
            );
            return Err(err.into());
        }
        let dima = self.dima.commit_article(&dima_abox)?;
        progress.advance(ArticleState::MappedSchema2)?;
        progress.advance(ArticleState::Persisted)?;

        Ok(ArticleReport {
            article_id: semantic.article_id.clone(),
            influence_mini,
            dima,
            state: progress.state(),
        })
    }
}

/// One query invocation over a fresh reasoning session.
#[derive(Debug)]
pub struct QueryRun {
    session: ReasoningSession,
    executor: QueryExecutor,
}

impl QueryRun {
    /// Loads both persisted graphs and reasons over them with the configured
    /// service.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Setup`] if a graph is missing or unreadable,
    /// or [`SessionError::Reasoner`] if reasoning fails under the `fail`
    /// policy.
    pub fn open(config: &Config) -> Result<Self, SessionError> {
        config.validate().map_err(SetupError::from)?;
        let bridge = ReasonerBridge::from_config(&config.reasoner).map_err(SetupError::from)?;
        Self::with_bridge(&config.storage, &bridge)
    }

    /// Like [`QueryRun::open`] with an explicit bridge.
    ///
    /// # Errors
    ///
    /// Same as [`QueryRun::open`].
    pub fn with_bridge(storage: &StorageConfig, bridge: &ReasonerBridge) -> Result<Self, SessionError> {
        let (_, dima_schema) = load_schemas()?;
        let mut graphs = Vec::new();
        for module in ModuleId::ALL {
            let path = storage.graph_path(module);
            if !path.exists() {
                return Err(SetupError::from(PersistenceError::Missing {
                    path: path.to_path_buf(),
                })
                .into());
            }
            graphs.push(assembler::load(path).map_err(SetupError::from)?);
        }
        let refs: Vec<&Graph> = graphs.iter().collect();
        Self::from_graphs(bridge, dima_schema, &refs)
    }

    /// Reasons over in-memory graphs.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Reasoner`] if reasoning fails under the
    /// `fail` policy.
    pub fn from_graphs(
        bridge: &ReasonerBridge,
        schema: Arc<Schema>,
        graphs: &[&Graph],
    ) -> Result<Self, SessionError> {
        let session = bridge.open_session(graphs)?;
        Ok(Self {
            session,
            executor: QueryExecutor::new(schema),
        })
    }

    /// The session queries run against.
    #[must_use]
    pub fn session(&self) -> &ReasoningSession {
        &self.session
    }

    /// Runs one SPARQL query.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Query`] on a syntax error, an unresolvable
    /// term or an evaluation failure.
    pub fn execute(&self, query: &str) -> Result<QueryOutcome, SessionError> {
        Ok(self.executor.execute(query, &self.session)?)
    }
}
