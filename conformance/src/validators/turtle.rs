//! Turtle 1.1 validator.
//!
//! Both documents must parse with a conforming Turtle parser. The triple
//! count of each is reported so runs can be compared.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sophia_api::source::TripleSource;
use sophia_turtle::parser::turtle;

use crate::report::{ConformanceReport, TestResult};
use crate::{ONTOLOGY_FILE, SHAPES_FILE};

const VALIDATOR: &str = "turtle";

/// Parses `Products.ttl` and `Shacl_shapes.ttl` under `artifacts`.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    for name in [ONTOLOGY_FILE, SHAPES_FILE] {
        validate_file(&artifacts.join(name), name, &mut report)?;
    }
    Ok(report)
}

fn validate_file(path: &Path, name: &str, report: &mut ConformanceReport) -> Result<()> {
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{name} not found in artifacts directory"),
        ));
        return Ok(());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    match count_triples(&content) {
        Ok(0) => report.push(TestResult::fail(
            VALIDATOR,
            format!("{name} contains no triples"),
        )),
        Ok(triples) => report.push(TestResult::pass(
            VALIDATOR,
            format!("{name} is valid Turtle ({triples} triples)"),
        )),
        Err(e) => report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name} is not valid Turtle"),
            vec![e],
        )),
    }
    Ok(())
}

/// Number of triples in a Turtle document, or the parser's message.
pub fn count_triples(content: &str) -> Result<usize, String> {
    let mut triples = 0usize;
    turtle::parse_str(content)
        .for_each_triple(|_| triples += 1)
        .map_err(|e| e.to_string())?;
    Ok(triples)
}
