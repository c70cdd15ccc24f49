//! Interface to the external feature extractor.
//!
//! The extractor turns raw text into a [`SemanticRecord`] and then a
//! [`BiasRecord`]. Its internals are out of scope; [`RecordDirectory`]
//! serves the JSON files it leaves behind.

use std::path::{Path, PathBuf};

use crate::article::ArticleInput;
use crate::error::MappingError;
use crate::record::{BiasRecord, SemanticRecord};

/// A provider of extractor output for one article at a time.
pub trait FeatureSource {
    /// The narrative analysis of `article`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::FeaturesUnavailable`] if the extractor has no
    /// output for the article, or [`MappingError::MalformedRecord`] if it is
    /// unreadable.
    fn semantic_record(&self, article: &ArticleInput) -> Result<SemanticRecord, MappingError>;

    /// The technique annotations of an analysed article.
    ///
    /// # Errors
    ///
    /// Same as [`FeatureSource::semantic_record`].
    fn bias_record(&self, semantic: &SemanticRecord) -> Result<BiasRecord, MappingError>;
}

/// Reads `article_processed_<id>.json` and `article_biases_<id>.json` files.
#[derive(Debug, Clone)]
pub struct RecordDirectory {
    semantic_dir: PathBuf,
    bias_dir: PathBuf,
}

impl RecordDirectory {
    /// Serves records from the two directories.
    pub fn new(semantic_dir: impl Into<PathBuf>, bias_dir: impl Into<PathBuf>) -> Self {
        Self {
            semantic_dir: semantic_dir.into(),
            bias_dir: bias_dir.into(),
        }
    }

    /// Path of the narrative record for `article_id`.
    #[must_use]
    pub fn semantic_path(&self, article_id: &str) -> PathBuf {
        self.semantic_dir
            .join(format!("article_processed_{article_id}.json"))
    }

    /// Path of the bias record for `article_id`.
    #[must_use]
    pub fn bias_path(&self, article_id: &str) -> PathBuf {
        self.bias_dir.join(format!("article_biases_{article_id}.json"))
    }
}

fn read_record(article: &str, path: &Path) -> Result<String, MappingError> {
    std::fs::read_to_string(path).map_err(|e| MappingError::FeaturesUnavailable {
        article: article.to_owned(),
        reason: format!("{}: {e}", path.display()),
    })
}

impl FeatureSource for RecordDirectory {
    fn semantic_record(&self, article: &ArticleInput) -> Result<SemanticRecord, MappingError> {
        let path = self.semantic_path(&article.id);
        let record = SemanticRecord::from_json(&read_record(&article.id, &path)?)?;
        if record.article_id != article.id {
            return Err(MappingError::ArticleMismatch {
                expected: article.id.clone(),
                found: record.article_id,
            });
        }
        tracing::debug!(article = %article.id, path = %path.display(), "read semantic record");
        Ok(record)
    }

    fn bias_record(&self, semantic: &SemanticRecord) -> Result<BiasRecord, MappingError> {
        let path = self.bias_path(&semantic.article_id);
        let record = BiasRecord::from_json(&read_record(&semantic.article_id, &path)?)?;
        tracing::debug!(
            article = %semantic.article_id,
            hits = record.len(),
            "read bias record"
        );
        Ok(record)
    }
}
