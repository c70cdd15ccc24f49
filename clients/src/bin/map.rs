//! `dima-map`: maps articles onto both schema modules and updates the
//! persisted module graphs.
//!
//! Articles come from raw text, a folder of `*.txt` files, or existing
//! extractor records named by article id. The extractor's output is read
//! from the configured record directories.
//!
//! **Usage:**
//! ```text
//! dima-map [--config <path>] (--text <text> | --articles <dir> [--limit <n>] | --record <id>...)
//! ```
//!
//! Exits non-zero if any article fails; the others are still persisted.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dima_pipeline::article::scan_folder;
use dima_pipeline::{ArticleInput, ArticleResult, Config, MappingRun};
use tracing_subscriber::EnvFilter;

/// Map articles onto the Influence-Mini and DIMA graphs.
#[derive(Parser)]
#[command(name = "dima-map", about = "Map articles onto the DIMA-OTK module graphs")]
struct Args {
    /// Configuration file (default: dima-otk.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raw article text.
    #[arg(long, conflicts_with_all = ["articles", "record"])]
    text: Option<String>,

    /// Folder of `*.txt` articles.
    #[arg(long, conflicts_with = "record")]
    articles: Option<PathBuf>,

    /// Process at most this many articles from the folder.
    #[arg(long, requires = "articles")]
    limit: Option<usize>,

    /// Id of an article whose extractor records already exist.
    #[arg(long)]
    record: Vec<String>,

    /// Directory holding both kinds of extractor records.
    #[arg(long)]
    records: Option<PathBuf>,

    /// Influence-Mini graph file.
    #[arg(long)]
    influence_mini_graph: Option<PathBuf>,

    /// DIMA graph file.
    #[arg(long)]
    dima_graph: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = args.records {
        config.storage.semantic_records = dir.clone();
        config.storage.bias_records = dir;
    }
    if let Some(path) = args.influence_mini_graph {
        config.storage.influence_mini_graph = path;
    }
    if let Some(path) = args.dima_graph {
        config.storage.dima_graph = path;
    }

    let mut articles = Vec::new();
    let mut unreadable = Vec::new();
    if let Some(text) = &args.text {
        articles.push(ArticleInput::from_text(text));
    } else if let Some(dir) = &args.articles {
        let (found, failures) = scan_folder(dir, args.limit)
            .with_context(|| format!("Failed to read article folder {}", dir.display()))?;
        articles = found;
        unreadable = failures;
    } else if !args.record.is_empty() {
        for id in &args.record {
            articles.push(ArticleInput::with_id(id, "").with_context(|| format!("Bad --record {id}"))?);
        }
    } else {
        bail!("nothing to map: pass --text, --articles or --record");
    }

    tracing::info!(
        articles = articles.len(),
        unreadable = unreadable.len(),
        "mapping articles"
    );
    let mut run = MappingRun::with_record_directory(&config).context("Failed to open module graphs")?;
    let mut report = run.process_batch(&articles);
    for (path, err) in unreadable {
        report.push(
            ArticleResult::failed(path.display().to_string(), format!("unreadable: {err}"))
                .with_source(Some(path)),
        );
    }

    println!("DIMA-OTK Mapping Report");
    println!("=======================");
    println!();
    for result in &report.results {
        let status = if result.is_failure() { "FAIL" } else { "OK" };
        match &result.source {
            Some(source) => println!("[{status}] {} ({}): {}", result.article, source.display(), result.message),
            None => println!("[{status}] {}: {}", result.article, result.message),
        }
        for detail in &result.details {
            println!("       {detail}");
        }
    }
    println!();
    println!(
        "Summary: {} persisted, {} failed",
        report.results.len() - report.failure_count(),
        report.failure_count()
    );
    println!("  {}", config.storage.influence_mini_graph.display());
    println!("  {}", config.storage.dima_graph.display());

    if !report.all_succeeded() {
        process::exit(1);
    }
    Ok(())
}
