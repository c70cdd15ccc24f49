//! Per-article outcomes of a mapping batch.

use std::path::PathBuf;

/// Outcome of processing one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Both module graphs were updated.
    Persisted,
    /// The article was aborted.
    Failed,
}

/// Result of one article in a batch.
#[derive(Debug, Clone)]
pub struct ArticleResult {
    /// Article id.
    pub article: String,
    /// Input file, when the article came from a folder.
    pub source: Option<PathBuf>,
    /// Whether the article made it into the graphs.
    pub outcome: Outcome,
    /// Human-readable summary or error message.
    pub message: String,
    /// Additional detail lines.
    pub details: Vec<String>,
}

impl ArticleResult {
    /// A persisted article.
    pub fn persisted(article: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            article: article.into(),
            source: None,
            outcome: Outcome::Persisted,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// An aborted article.
    pub fn failed(article: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            article: article.into(),
            source: None,
            outcome: Outcome::Failed,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Attaches the input file.
    #[must_use]
    pub fn with_source(mut self, source: Option<PathBuf>) -> Self {
        self.source = source;
        self
    }

    /// Attaches detail lines.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Returns true if the article was aborted.
    pub fn is_failure(&self) -> bool {
        self.outcome == Outcome::Failed
    }
}

/// Results of a whole mapping invocation.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per article, in processing order.
    pub results: Vec<ArticleResult>,
}

impl BatchReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: ArticleResult) {
        self.results.push(result);
    }

    /// Number of aborted articles.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if every article was persisted.
    pub fn all_succeeded(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_failures() {
        let mut report = BatchReport::new();
        assert!(report.all_succeeded());
        report.push(ArticleResult::persisted("ex1", "ok"));
        report.push(
            ArticleResult::failed("ex2", "unknown technique")
                .with_details(vec!["phase Detect".into()]),
        );
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_succeeded());
    }
}
