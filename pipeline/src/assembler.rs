//! Graph assembler: one persisted Turtle graph per schema module.
//!
//! A [`ModuleStore`] holds the module's terminology plus every article's
//! individuals. Committing an article first drops every triple that mentions
//! one of that article's IRIs, in either namespace, then inserts the new
//! ABox and rewrites the file.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dima_ontology::iris::{NS_DIMA, NS_SCIM};
use dima_ontology::parse::parse_turtle;
use dima_ontology::serializer::turtle::to_turtle;
use dima_ontology::{Graph, ModuleId, Schema, Triple};

use crate::error::PersistenceError;
use crate::mapper::Abox;

/// Triple counts of one commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    /// Triples dropped because they mentioned the article's old individuals.
    pub removed: usize,
    /// Triples of the new ABox.
    pub inserted: usize,
}

/// The in-memory graph of one module, backed by a Turtle file.
#[derive(Debug)]
pub struct ModuleStore {
    schema: Arc<Schema>,
    path: PathBuf,
    graph: Graph,
}

impl ModuleStore {
    /// Loads the graph persisted at `path`, or starts from the bare
    /// terminology when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if an existing file cannot be read or parsed.
    pub fn open(schema: Arc<Schema>, path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let mut graph = if path.exists() {
            let g = load(&path)?;
            tracing::info!(
                module = %schema.id(),
                path = %path.display(),
                triples = g.len(),
                "loaded persisted graph"
            );
            g
        } else {
            tracing::info!(module = %schema.id(), path = %path.display(), "starting new graph");
            Graph::new()
        };
        graph.extend(&schema.tbox_graph());
        Ok(Self {
            schema,
            path,
            graph,
        })
    }

    /// Which module this store persists.
    #[must_use]
    pub fn module(&self) -> ModuleId {
        self.schema.id()
    }

    /// The schema the store was opened with.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current graph, terminology included.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Ids of the articles that have individuals in this graph.
    #[must_use]
    pub fn articles(&self) -> BTreeSet<String> {
        let (graph, schema) = (&self.graph, &self.schema);
        [NS_SCIM, NS_DIMA]
            .into_iter()
            .flat_map(move |ns| {
                graph
                    .iris_with_prefix(ns)
                    .into_iter()
                    .filter(move |iri| !schema.is_vocabulary(iri))
                    .filter_map(move |iri| {
                        let local = iri.strip_prefix(ns)?;
                        local.split_once('_').map(|(id, _)| id.to_owned())
                    })
            })
            .collect()
    }

    /// Replaces the article's individuals with `abox` and rewrites the file.
    ///
    /// The in-memory graph only changes once the file is written, so a
    /// failed commit leaves both untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Write`] if the file cannot be written.
    pub fn commit_article(&mut self, abox: &Abox) -> Result<CommitStats, PersistenceError> {
        let stats = self.replace_article(&abox.article_id, &abox.to_graph())?;
        tracing::info!(
            module = %self.module(),
            article = %abox.article_id,
            removed = stats.removed,
            inserted = stats.inserted,
            "article committed"
        );
        Ok(stats)
    }

    /// Drops every individual of `article_id` and rewrites the file.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Write`] if the file cannot be written.
    pub fn withdraw_article(&mut self, article_id: &str) -> Result<usize, PersistenceError> {
        let stats = self.replace_article(article_id, &Graph::new())?;
        tracing::info!(
            module = %self.module(),
            article = %article_id,
            removed = stats.removed,
            "article withdrawn"
        );
        Ok(stats.removed)
    }

    fn replace_article(&mut self, article_id: &str, additions: &Graph) -> Result<CommitStats, PersistenceError> {
        let mut next = self.graph.clone();
        let removed = remove_article(&mut next, article_id);
        next.extend(additions);
        persist(&next, &self.schema.prefixes(), &self.path)?;
        self.graph = next;
        Ok(CommitStats {
            removed,
            inserted: additions.len(),
        })
    }
}

/// Drops every triple whose subject or object is one of `article_id`'s
/// individuals in either namespace. Returns the number removed.
pub fn remove_article(graph: &mut Graph, article_id: &str) -> usize {
    let prefixes = [format!("{NS_SCIM}{article_id}_"), format!("{NS_DIMA}{article_id}_")];
    let owned = |t: &Triple| {
        [&t.subject, &t.object]
            .into_iter()
            .filter_map(|term| term.as_iri())
            .any(|iri| prefixes.iter().any(|p| iri.starts_with(p.as_str())))
    };
    graph.retain(|t| !owned(t))
}

/// The module's terminology together with every ABox in `aboxes`.
#[must_use]
pub fn assemble(schema: &Schema, aboxes: &[Abox]) -> Graph {
    let mut graph = schema.tbox_graph();
    for abox in aboxes {
        graph.extend(&abox.to_graph());
    }
    graph
}

/// Reads a persisted Turtle graph.
///
/// # Errors
///
/// Returns [`PersistenceError::Read`] or [`PersistenceError::Parse`].
pub fn load(path: &Path) -> Result<Graph, PersistenceError> {
    let text = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_turtle(&text).map_err(|source| PersistenceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `graph` as Turtle to a sibling temporary file, then renames it
/// over `path`.
///
/// # Errors
///
/// Returns [`PersistenceError::Write`] if any step fails.
pub fn persist(graph: &Graph, prefixes: &[(&str, &str)], path: &Path) -> Result<(), PersistenceError> {
    let write_err = |source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph.ttl".to_owned());
    let tmp = path.with_file_name(format!(".{name}.tmp"));
    fs::write(&tmp, to_turtle(graph, prefixes)).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;
    tracing::debug!(path = %path.display(), triples = graph.len(), "graph written");
    Ok(())
}
