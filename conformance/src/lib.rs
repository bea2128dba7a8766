//! Catalog conformance suite.
//!
//! Checks a pair of generated documents (`Products.ttl`, `Shacl_shapes.ttl`)
//! against the rules they were built to satisfy.
//!
//! # Conformance Scope
//!
//! | Artifact | Check |
//! |----------|-------|
//! | Ontology, shapes | Turtle 1.1 well-formedness |
//! | Ontology | Class and instance inventory against the source CSV |
//! | Shapes | Byte-identical to the published shapes |
//!
//! # Entry Point
//!
//! ```no_run
//! use catalog_conformance::{run_all, ArtifactPaths};
//! use std::path::PathBuf;
//!
//! let paths = ArtifactPaths {
//!     artifacts: PathBuf::from("."),
//!     input: Some(PathBuf::from("Products.csv")),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

pub use report::{ConformanceReport, Severity, TestResult};

/// File name of the ontology document.
pub const ONTOLOGY_FILE: &str = "Products.ttl";
/// File name of the shapes document.
pub const SHAPES_FILE: &str = "Shacl_shapes.ttl";

/// Paths required by the conformance runner.
pub struct ArtifactPaths {
    /// Directory holding `Products.ttl` and `Shacl_shapes.ttl`.
    pub artifacts: PathBuf,
    /// CSV the ontology was generated from; the inventory check is skipped
    /// when absent.
    pub input: Option<PathBuf>,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Turtle 1.1 syntax of both documents
/// 2. Ontology inventory against the source CSV
/// 3. Shapes document content
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &ArtifactPaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1. Turtle syntax
    report.extend(validators::turtle::validate(&paths.artifacts)?);

    // 2. Inventory
    match &paths.input {
        Some(input) => report.extend(validators::inventory::validate(&paths.artifacts, input)?),
        None => report.push(TestResult::warn(
            "inventory",
            "no input CSV given, inventory check skipped",
        )),
    }

    // 3. Shapes
    report.extend(validators::shacl::validate(&paths.artifacts)?);

    Ok(report)
}
