//! `dima-build`: writes the terminology of both schema modules as build
//! artifacts.
//!
//! **Outputs**, per module (`influence-mini`, `dima-bias`):
//! - `<out>/<module>.json`: JSON-LD 1.1
//! - `<out>/<module>.ttl`: Turtle 1.1
//! - `<out>/<module>.nt`: N-Triples
//!
//! **Usage:**
//! ```text
//! dima-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dima_ontology::serializer::{jsonld, ntriples, turtle};
use dima_ontology::{registry, ModuleId};
use tracing_subscriber::EnvFilter;

/// Build the DIMA-OTK schema artifacts.
#[derive(Parser)]
#[command(name = "dima-build", about = "Build DIMA-OTK schema artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "output/schema")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    for id in ModuleId::ALL {
        let schema = registry::load(id).with_context(|| format!("Invalid schema module {id}"))?;
        let module = schema.module();
        println!(
            "{} ({}): {} classes, {} properties, {} individuals",
            module.namespace.label,
            id,
            module.classes.len(),
            module.properties.len(),
            module.individuals.len()
        );

        let tbox = schema.tbox_graph();
        let prefixes = schema.prefixes();

        let json_path = out.join(format!("{id}.json"));
        let json_str = serde_json::to_string_pretty(&jsonld::to_json_ld(&tbox, &prefixes))
            .with_context(|| format!("Failed to serialize {id} to JSON-LD"))?;
        fs::write(&json_path, &json_str)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        println!("  Written: {}", json_path.display());

        let ttl_path = out.join(format!("{id}.ttl"));
        fs::write(&ttl_path, turtle::to_turtle(&tbox, &prefixes))
            .with_context(|| format!("Failed to write {}", ttl_path.display()))?;
        println!("  Written: {}", ttl_path.display());

        let nt_path = out.join(format!("{id}.nt"));
        fs::write(&nt_path, ntriples::to_ntriples(&tbox))
            .with_context(|| format!("Failed to write {}", nt_path.display()))?;
        println!("  Written: {}", nt_path.display());
    }

    println!("Build complete.");
    Ok(())
}
