//! `rdfs:seeAlso` references for product types.
//!
//! The product-type vocabulary is no longer maintained and several of its
//! disambiguated pages moved; these rows point the affected types at the
//! right page. Annotations are emitted whether or not the type occurs in the
//! input.

use crate::model::{SeeAlso, SeeAlsoTarget};

const REFERENCES: &[(&str, &str)] = &[
    ("Orange", "http://www.productontology.org/id/Orange_(fruit)"),
    ("Lime", "http://www.productontology.org/id/Lime_(fruit)"),
    ("Kiwi", "http://www.productontology.org/id/Kiwifruit"),
    ("Spreads", "http://www.productontology.org/id/Spread_(food)"),
    ("Cracker", "http://www.productontology.org/id/Cracker_(food)"),
    ("Sponge", "http://www.productontology.org/id/Sponge_(tool)"),
    ("Duster", "http://www.productontology.org/id/Housekeeping"),
];

/// Returns the cross-reference table in document order.
#[must_use]
pub fn see_also() -> Vec<SeeAlso> {
    REFERENCES
        .iter()
        .map(|&(class_label, target)| SeeAlso {
            class_label,
            target: SeeAlsoTarget::classify(target),
        })
        .collect()
}
