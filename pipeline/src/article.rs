//! Article intake: ids, text normalization and folder scanning.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::error::MappingError;

/// Characters of trimmed raw text hashed into the article id.
pub const ID_SAMPLE_CHARS: usize = 100;

/// Hex digits kept from the digest.
pub const ID_LENGTH: usize = 10;

/// One article to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleInput {
    /// Stable id, also the IRI prefix of every individual minted for it.
    pub id: String,
    /// Normalized text.
    pub text: String,
    /// File the text came from, if any.
    pub source: Option<PathBuf>,
}

impl ArticleInput {
    /// Derives the id from the trimmed raw text, then normalizes it.
    ///
    /// The extractor names its records after the raw-text id, so blanks
    /// are hashed as given.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            id: article_id(text.trim()),
            text: normalize_text(text),
            source: None,
        }
    }

    /// Uses a caller-chosen id, e.g. for records extracted earlier.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidArticleId`] if `id` is not a valid article id.
    pub fn with_id(id: &str, text: &str) -> Result<Self, MappingError> {
        validate_article_id(id)?;
        Ok(Self {
            id: id.to_owned(),
            text: normalize_text(text),
            source: None,
        })
    }
}

/// Derives the article id: SHA-256 of the first [`ID_SAMPLE_CHARS`]
/// characters, first [`ID_LENGTH`] hex digits.
#[must_use]
pub fn article_id(text: &str) -> String {
    let sample: String = text.chars().take(ID_SAMPLE_CHARS).collect();
    let mut h = Sha256::new();
    h.update(sample.as_bytes());
    let mut hex = String::with_capacity(ID_LENGTH);
    for b in h.finalize() {
        let _ = write!(hex, "{b:02x}");
    }
    hex.truncate(ID_LENGTH);
    hex
}

/// Checks that `id` is non-empty ASCII letters, digits and `-`.
///
/// Underscores are excluded so that `<id>_` never prefixes another article's
/// individuals.
///
/// # Errors
///
/// Returns [`MappingError::InvalidArticleId`] otherwise.
pub fn validate_article_id(id: &str) -> Result<(), MappingError> {
    let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(MappingError::InvalidArticleId(id.to_owned()))
    }
}

/// Cleans spreadsheet line-break markers and runs of spaces or tabs,
/// keeping newlines, and trims the result.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    static BLANKS: OnceLock<Option<Regex>> = OnceLock::new();
    let text = text.replace("_x000D_", "\n\n").replace('\u{fffd}', "");
    let collapsed = match BLANKS.get_or_init(|| Regex::new(r"[ \t]+").ok()) {
        Some(re) => re.replace_all(&text, " ").into_owned(),
        None => text,
    };
    collapsed.trim().to_owned()
}

/// Reads the first `limit` `*.txt` files directly inside `dir`, in
/// file-name order.
///
/// Empty files are skipped with a warning. Unreadable files are reported
/// in the second element and do not stop the scan.
///
/// # Errors
///
/// Returns the I/O error if `dir` itself cannot be listed.
pub fn scan_folder(
    dir: &Path,
    limit: Option<usize>,
) -> std::io::Result<(Vec<ArticleInput>, Vec<(PathBuf, std::io::Error)>)> {
    std::fs::read_dir(dir)?;
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|x| x == "txt"))
        .collect();
    paths.sort();
    if let Some(n) = limit {
        paths.truncate(n);
    }

    let mut articles = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!(path = %path.display(), "skipping empty article");
            }
            Ok(text) => {
                let mut article = ArticleInput::from_text(&text);
                article.source = Some(path);
                articles.push(article);
            }
            Err(e) => failures.push((path, e)),
        }
    }
    tracing::info!(dir = %dir.display(), articles = articles.len(), "scanned article folder");
    Ok((articles, failures))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_ten_hex_digits_of_the_first_hundred_chars() {
        let base = "a".repeat(ID_SAMPLE_CHARS);
        let id = article_id(&base);
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(article_id(&format!("{base} and more")), id);
        assert_ne!(article_id("b"), id);
        assert!(validate_article_id(&id).is_ok());
    }

    #[test]
    fn id_hashes_raw_blanks() {
        let raw = "  Breaking:  prices\trise again\n";
        let article = ArticleInput::from_text(raw);
        assert_eq!(article.id, article_id("Breaking:  prices\trise again"));
        assert_ne!(article.id, article_id(&article.text));
        assert_eq!(article.text, "Breaking: prices rise again");
    }

    #[test]
    fn known_digest() {
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(article_id("abc"), "ba7816bf8f");
    }

    #[test]
    fn rejects_ids_that_could_collide_on_prefix() {
        assert!(validate_article_id("ex1").is_ok());
        assert!(validate_article_id("ex-1").is_ok());
        assert!(validate_article_id("").is_err());
        assert!(validate_article_id("ex_1").is_err());
        assert!(validate_article_id("ex 1").is_err());
    }

    #[test]
    fn normalization_keeps_newlines() {
        assert_eq!(normalize_text("  a \t b_x000D_c  "), "a b\n\nc");
    }

    #[test]
    fn folder_scan_sorts_limits_and_skips_empty() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        for (name, body) in [("b.txt", "second"), ("a.txt", "first"), ("c.txt", "  "), ("d.md", "x")] {
            assert!(std::fs::write(dir.path().join(name), body).is_ok());
        }
        let Ok((articles, failures)) = scan_folder(dir.path(), None) else {
            panic!("scan should succeed");
        };
        assert!(failures.is_empty());
        let texts: Vec<&str> = articles.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);

        let Ok((limited, _)) = scan_folder(dir.path(), Some(1)) else {
            panic!("scan should succeed");
        };
        assert_eq!(limited.len(), 1);

        // the empty c.txt still counts toward the limit
        let Ok((limited, _)) = scan_folder(dir.path(), Some(3)) else {
            panic!("scan should succeed");
        };
        assert_eq!(limited.len(), 2);
        let Ok((limited, _)) = scan_folder(dir.path(), Some(2)) else {
            panic!("scan should succeed");
        };
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn missing_folder_is_an_error() {
        assert!(scan_folder(Path::new("/nonexistent/articles"), None).is_err());
    }
}
