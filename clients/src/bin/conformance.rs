//! `catalog-conformance`: checks generated catalog documents.
//!
//! Runs the conformance suite over `Products.ttl` and `Shacl_shapes.ttl`:
//! Turtle well-formedness, class and instance inventory against the source
//! CSV, and byte-identical shapes.
//!
//! **Usage:**
//! ```
//! catalog-conformance [--artifacts <path>] [--input <csv>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use catalog_conformance::{run_all, ArtifactPaths, Severity};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the catalog conformance suite.
#[derive(Parser)]
#[command(
    name = "catalog-conformance",
    about = "Validate generated product ontology and SHACL shapes"
)]
struct Args {
    /// Directory containing Products.ttl and Shacl_shapes.ttl.
    #[arg(long, default_value = ".")]
    artifacts: PathBuf,

    /// Products CSV the ontology was generated from.
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let report = run_all(&ArtifactPaths {
        artifacts: args.artifacts,
        input: args.input,
    })?;

    println!("Product Catalog Conformance Report");
    println!("==================================");
    println!();
    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
