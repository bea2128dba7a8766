//! Ontology inventory validator.
//!
//! Rebuilds the taxonomy from the source CSV and verifies that the ontology
//! document on disk declares it:
//! - every category, subcategory and type as an `owl:Class` under its parent
//!   (categories under `gr:ProductOrService`)
//! - one `:hasProductID` assertion per input row

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use catalog_ontology::model::iris;
use catalog_ontology::vocabulary::terms;
use catalog_ontology::{input, Prefixes, StrictMode, Taxonomy};
use sophia_api::source::TripleSource;
use sophia_api::term::Term;
use sophia_api::triple::Triple;
use sophia_turtle::parser::turtle;

use crate::report::{ConformanceReport, TestResult};
use crate::ONTOLOGY_FILE;

const VALIDATOR: &str = "inventory";
const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Checks `Products.ttl` under `artifacts` against the rows of `input_csv`.
///
/// # Errors
///
/// Returns an error if an existing ontology file cannot be read. Problems
/// with the CSV itself are reported as failures.
pub fn validate(artifacts: &Path, input_csv: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let rows = match input::read_rows(input_csv) {
        Ok(rows) => rows,
        Err(e) => {
            report.push(TestResult::fail(VALIDATOR, format!("cannot read input: {e}")));
            return Ok(report);
        }
    };
    let taxonomy = match Taxonomy::build(&rows, StrictMode::default()) {
        Ok(taxonomy) => taxonomy,
        Err(e) => {
            report.push(TestResult::fail(VALIDATOR, format!("cannot rebuild taxonomy: {e}")));
            return Ok(report);
        }
    };

    let path = artifacts.join(ONTOLOGY_FILE);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{ONTOLOGY_FILE} not found in artifacts directory"),
        ));
        return Ok(report);
    }
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let prefixes = Prefixes::standard();
    let statements = match Statements::parse(&content, &prefixes) {
        Ok(statements) => statements,
        Err(e) => {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{ONTOLOGY_FILE} cannot be parsed, inventory not checked"),
                vec![e],
            ));
            return Ok(report);
        }
    };

    check_classes(&taxonomy, &statements, &prefixes, &mut report);

    if statements.product_ids == rows.len() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} product instances for {} rows", statements.product_ids, rows.len()),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "{} product instances for {} rows",
                statements.product_ids,
                rows.len()
            ),
        ));
    }

    Ok(report)
}

/// IRI-to-IRI triples of the document plus the number of product id
/// assertions.
struct Statements {
    links: HashSet<(String, String, String)>,
    product_ids: usize,
}

impl Statements {
    fn parse(content: &str, prefixes: &Prefixes) -> Result<Self, String> {
        let has_product_id = prefixes.expand(terms::HAS_PRODUCT_ID).unwrap_or_default();
        let mut links = HashSet::new();
        let mut product_ids = 0usize;
        turtle::parse_str(content)
            .for_each_triple(|t| {
                let s = t.s().iri().map(|iri| iri.as_str().to_owned());
                let p = t.p().iri().map(|iri| iri.as_str().to_owned());
                let o = t.o().iri().map(|iri| iri.as_str().to_owned());
                if p.as_deref() == Some(has_product_id.as_str()) {
                    product_ids += 1;
                }
                if let (Some(s), Some(p), Some(o)) = (s, p, o) {
                    links.insert((s, p, o));
                }
            })
            .map_err(|e| e.to_string())?;
        Ok(Self { links, product_ids })
    }

    fn contains(&self, s: &str, p: &str, o: &str) -> bool {
        self.links
            .contains(&(s.to_owned(), p.to_owned(), o.to_owned()))
    }
}

fn check_classes(
    taxonomy: &Taxonomy,
    statements: &Statements,
    prefixes: &Prefixes,
    report: &mut ConformanceReport,
) {
    let owl_class = format!("{}Class", iris::OWL);
    let sub_class_of = format!("{}subClassOf", iris::RDFS);
    let root = prefixes.expand(terms::PRODUCT_OR_SERVICE).unwrap_or_default();

    let mut missing = Vec::new();
    let mut checked = 0usize;
    for node in taxonomy.nodes() {
        checked += 1;
        let curie = node.id.to_string();
        let Some(class) = prefixes.expand(&curie) else {
            missing.push(format!("{curie}: prefix not bound"));
            continue;
        };
        if !statements.contains(&class, RDF_TYPE, &owl_class) {
            missing.push(format!("{curie} is not declared an owl:Class"));
        }
        let parent = match &node.parent {
            Some(parent) => prefixes.expand(&parent.to_string()).unwrap_or_default(),
            None => root.clone(),
        };
        if !statements.contains(&class, &sub_class_of, &parent) {
            missing.push(format!("{curie} is not a subclass of <{parent}>"));
        }
    }

    if missing.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "{} categories, {} subcategories, {} types declared",
                taxonomy.categories().len(),
                taxonomy.subcategories().len(),
                taxonomy.types().len()
            ),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} of {checked} taxonomy classes are incomplete", missing.len()),
            missing,
        ));
    }
}
