//! Run configuration.
//!
//! Read from an optional TOML file (`dima-otk.toml` by default). Every field
//! has a default, so an absent file or an empty table is valid; clients
//! override individual fields from their command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use dima_ontology::ModuleId;
use serde::Deserialize;

use crate::error::ConfigError;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "dima-otk.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where graphs and extractor records live.
    pub storage: StorageConfig,
    /// Which reasoning service to call and how.
    pub reasoner: ReasonerConfig,
}

/// `[storage]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Persisted influence-mini graph (Turtle).
    pub influence_mini_graph: PathBuf,
    /// Persisted DIMA graph (Turtle).
    pub dima_graph: PathBuf,
    /// Directory of `article_processed_<id>.json` records.
    pub semantic_records: PathBuf,
    /// Directory of `article_biases_<id>.json` records.
    pub bias_records: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            influence_mini_graph: PathBuf::from("output/owl_influence-mini/influence-mini_full.ttl"),
            dima_graph: PathBuf::from("output/owl_dima/dima_full.ttl"),
            semantic_records: PathBuf::from("output/semantic_analysis"),
            bias_records: PathBuf::from("output/bias_analysis"),
        }
    }
}

impl StorageConfig {
    /// Persisted graph path of `module`.
    #[must_use]
    pub fn graph_path(&self, module: ModuleId) -> &Path {
        match module {
            ModuleId::InfluenceMini => &self.influence_mini_graph,
            ModuleId::DimaBias => &self.dima_graph,
        }
    }

    /// Places every relative path under `root`.
    #[must_use]
    pub fn rooted_at(self, root: &Path) -> Self {
        Self {
            influence_mini_graph: root.join(self.influence_mini_graph),
            dima_graph: root.join(self.dima_graph),
            semantic_records: root.join(self.semantic_records),
            bias_records: root.join(self.bias_records),
        }
    }
}

/// Reasoning service implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonerKind {
    /// In-process rule closure.
    #[default]
    Local,
    /// Remote endpoint speaking the N-Triples contract.
    Http,
}

/// What a query does when the reasoner fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Abort the query with the reasoner error.
    #[default]
    Fail,
    /// Answer over the asserted triples only and mark the session unreasoned.
    Unreasoned,
}

/// `[reasoner]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReasonerConfig {
    /// Service implementation.
    pub kind: ReasonerKind,
    /// Endpoint URL, required for `http`.
    pub endpoint: Option<String>,
    /// Upper bound on one reasoning call.
    pub timeout_secs: u64,
    /// Behaviour on failure.
    pub on_failure: FallbackPolicy,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            kind: ReasonerKind::Local,
            endpoint: None,
            timeout_secs: 30,
            on_failure: FallbackPolicy::Fail,
        }
    }
}

impl ReasonerConfig {
    /// The call bound as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Reads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or an inconsistent combination.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a file is selected and fails to load.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            tracing::info!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.exists() {
            tracing::info!(path = %default.display(), "loading config");
            return Self::from_file(default);
        }
        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Checks field combinations the types cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reasoner.kind == ReasonerKind::Http
            && self.reasoner.endpoint.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::Invalid(
                "reasoner.endpoint is required when reasoner.kind = \"http\"".to_owned(),
            ));
        }
        if self.reasoner.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "reasoner.timeout_secs must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let Ok(config) = Config::from_toml("") else {
            panic!("empty config should parse");
        };
        assert_eq!(config, Config::default());
        assert_eq!(config.reasoner.timeout(), Duration::from_secs(30));
        assert_eq!(
            config.storage.graph_path(ModuleId::DimaBias),
            Path::new("output/owl_dima/dima_full.ttl")
        );
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let toml = r#"
            [reasoner]
            kind = "http"
            endpoint = "http://localhost:8080/entail"
            on_failure = "unreasoned"
        "#;
        let Ok(config) = Config::from_toml(toml) else {
            panic!("config should parse");
        };
        assert_eq!(config.reasoner.kind, ReasonerKind::Http);
        assert_eq!(config.reasoner.on_failure, FallbackPolicy::Unreasoned);
        assert_eq!(config.reasoner.timeout_secs, 30);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn http_without_endpoint_is_invalid() {
        let result = Config::from_toml("[reasoner]\nkind = \"http\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let result = Config::from_toml("[reasoner]\non_failure = \"retry\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rooting_prefixes_every_path() {
        let storage = StorageConfig::default().rooted_at(Path::new("/tmp/run"));
        assert!(storage.influence_mini_graph.starts_with("/tmp/run"));
        assert!(storage.bias_records.starts_with("/tmp/run"));
    }
}
