//! `dima-query`: runs one SPARQL query over the reasoned union of both
//! persisted module graphs and prints the result as a table.
//!
//! The prefixes `scim`, `dima`, `rdf`, `rdfs`, `owl` and `xsd` are always
//! available.
//!
//! **Usage:**
//! ```text
//! dima-query [--config <path>] [--reasoner local|http] [--on-failure fail|unreasoned] <query>
//! dima-query --file <query.rq>
//! ```
//!
//! Exits non-zero on a query or reasoner error.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use dima_ontology::serializer::{compact, turtle};
use dima_ontology::{registry, ModuleId, Term};
use dima_pipeline::{Config, FallbackPolicy, QueryOutcome, QueryRun, ReasonerKind};
use tracing_subscriber::EnvFilter;

/// Cells longer than this are cut.
const MAX_CELL: usize = 40;

#[derive(Clone, Copy, ValueEnum)]
enum ReasonerArg {
    Local,
    Http,
}

#[derive(Clone, Copy, ValueEnum)]
enum FailureArg {
    Fail,
    Unreasoned,
}

/// Query the DIMA-OTK graphs.
#[derive(Parser)]
#[command(name = "dima-query", about = "Run a SPARQL query over the reasoned DIMA-OTK graphs")]
struct Args {
    /// SPARQL query text.
    #[arg(required_unless_present = "file")]
    query: Option<String>,

    /// Read the query from a file instead.
    #[arg(long, conflicts_with = "query")]
    file: Option<PathBuf>,

    /// Configuration file (default: dima-otk.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Influence-Mini graph file.
    #[arg(long)]
    influence_mini_graph: Option<PathBuf>,

    /// DIMA graph file.
    #[arg(long)]
    dima_graph: Option<PathBuf>,

    /// Reasoning service.
    #[arg(long, value_enum)]
    reasoner: Option<ReasonerArg>,

    /// Endpoint of the HTTP reasoning service.
    #[arg(long)]
    endpoint: Option<String>,

    /// Reasoner timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// What to do when the reasoner fails.
    #[arg(long, value_enum)]
    on_failure: Option<FailureArg>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.influence_mini_graph {
        config.storage.influence_mini_graph = path.clone();
    }
    if let Some(path) = &args.dima_graph {
        config.storage.dima_graph = path.clone();
    }
    if let Some(kind) = args.reasoner {
        config.reasoner.kind = match kind {
            ReasonerArg::Local => ReasonerKind::Local,
            ReasonerArg::Http => ReasonerKind::Http,
        };
    }
    if let Some(endpoint) = &args.endpoint {
        config.reasoner.endpoint = Some(endpoint.clone());
    }
    if let Some(secs) = args.timeout_secs {
        config.reasoner.timeout_secs = secs;
    }
    if let Some(policy) = args.on_failure {
        config.reasoner.on_failure = match policy {
            FailureArg::Fail => FallbackPolicy::Fail,
            FailureArg::Unreasoned => FallbackPolicy::Unreasoned,
        };
    }
}

fn render(term: &Term, prefixes: &[(&str, &str)]) -> String {
    let full = match term {
        Term::Iri(iri) => compact(iri, prefixes).unwrap_or_else(|| format!("<{iri}>")),
        Term::Blank(id) => format!("_:{id}"),
        Term::Literal(lit) => lit.lexical.clone(),
    };
    if full.chars().count() > MAX_CELL {
        let cut: String = full.chars().take(MAX_CELL - 3).collect();
        format!("{cut}...")
    } else {
        full
    }
}

fn print_table(variables: &[String], rows: &[Vec<Option<Term>>], prefixes: &[(&str, &str)]) {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_ref().map_or_else(String::new, |t| render(t, prefixes)))
                .collect()
        })
        .collect();
    let widths: Vec<usize> = variables
        .iter()
        .enumerate()
        .map(|(i, v)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(v.chars().count() + 1))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |values: Vec<String>| {
        values
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!("{v:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };
    println!("{}", line(variables.iter().map(|v| format!("?{v}")).collect()));
    println!(
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-")
    );
    for row in cells {
        println!("{}", line(row));
    }
    println!();
    println!("{} row(s)", rows.len());
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let query = match (&args.query, &args.file) {
        (Some(q), _) => q.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file {}", path.display()))?,
        (None, None) => bail!("no query given"),
    };

    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    apply_overrides(&mut config, &args);
    tracing::debug!(?config, "effective configuration");

    let prefixes = registry::load(ModuleId::DimaBias)
        .context("Invalid schema module")?
        .prefixes();
    let run = QueryRun::open(&config).context("Failed to open reasoning session")?;
    if !run.session().is_reasoned() {
        eprintln!("warning: reasoner unavailable, results use asserted triples only");
    }

    match run.execute(&query)? {
        QueryOutcome::Solutions { variables, rows } => print_table(&variables, &rows, &prefixes),
        QueryOutcome::Boolean(answer) => println!("{answer}"),
        QueryOutcome::Graph(graph) => print!("{}", turtle::to_turtle(&graph, &prefixes)),
    }
    Ok(())
}
