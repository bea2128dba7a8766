//! Shapes document validator.
//!
//! The shapes are input-independent, so the file on disk must match the
//! published text byte for byte.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use catalog_ontology::serializer::shacl::SHAPES;

use crate::report::{ConformanceReport, TestResult};
use crate::SHAPES_FILE;

const VALIDATOR: &str = "shacl";

/// Compares `Shacl_shapes.ttl` under `artifacts` with the published shapes.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let path = artifacts.join(SHAPES_FILE);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{SHAPES_FILE} not found in artifacts directory"),
        ));
        return Ok(report);
    }

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    if content == SHAPES {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{SHAPES_FILE} matches the published shapes"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{SHAPES_FILE} differs from the published shapes"),
            first_difference(&content, SHAPES).into_iter().collect(),
        ));
    }
    Ok(report)
}

fn first_difference(actual: &str, expected: &str) -> Option<String> {
    let mut actual_lines = actual.lines();
    let mut expected_lines = expected.lines();
    for line in 1.. {
        match (actual_lines.next(), expected_lines.next()) {
            (None, None) => return None,
            (a, e) if a == e => {}
            (a, e) => {
                return Some(format!(
                    "line {line}: expected {:?}, found {:?}",
                    e.unwrap_or("<end of file>"),
                    a.unwrap_or("<end of file>")
                ))
            }
        }
    }
    None
}
