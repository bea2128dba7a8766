//! Product catalog ontology encoded as typed Rust data.
//!
//! The `catalog-ontology` crate turns a denormalized product catalog (one CSV
//! row per product) into two Turtle documents: an OWL ontology with a
//! three-level class taxonomy plus one named individual per product, and a
//! static set of SHACL shapes those data must satisfy.
//!
//! # Entry Point
//!
//! ```
//! use catalog_ontology::{Catalog, CatalogConfig, Row};
//!
//! let rows = vec![Row {
//!     id: "P1".into(),
//!     name: "Fuji Apple".into(),
//!     category: "Fruit".into(),
//!     subcategory: "Apple".into(),
//!     type_: "Apple".into(),
//!     brand: "FarmCo".into(),
//!     price: 1.5,
//!     quantity: "1kg".into(),
//! }];
//! let config = CatalogConfig { seed: Some(7), ..CatalogConfig::default() };
//! let catalog = Catalog::build_default(&rows, &config).unwrap();
//! assert_eq!(catalog.taxonomy.categories().len(), 1);
//! assert_eq!(catalog.instances[0].id.to_string(), ":Fuji_Apple");
//! ```
//!
//! # Serialization
//!
//! ```
//! # use catalog_ontology::{Catalog, CatalogConfig, Prefixes};
//! # let catalog = Catalog::build_default(&[], &CatalogConfig::default()).unwrap();
//! let ontology = catalog_ontology::serializer::turtle::to_turtle(&catalog, &Prefixes::standard());
//! let shapes = catalog_ontology::serializer::shacl::to_shacl();
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod input;
pub mod instance;
pub mod model;
pub mod sanitize;
pub mod serializer;
pub mod taxonomy;
pub mod vocabulary;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

pub use config::{CatalogConfig, CollisionPolicy, InstancePolicy, Prefixes, StrictMode};
pub use error::{CatalogError, ErrorKind};
pub use instance::InstanceSynthesizer;
pub use model::{ClassNode, Identifier, Instance, Row, Tier};
pub use taxonomy::Taxonomy;

/// The taxonomy and instances derived from one row set.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Category, subcategory and type classes.
    pub taxonomy: Taxonomy,
    /// One instance per input row, in row order.
    pub instances: Vec<Instance>,
}

impl Catalog {
    /// Builds the catalog, drawing discounts from `rng`.
    ///
    /// The taxonomy is built from the whole row set before any instance is
    /// synthesized.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] raised by [`Taxonomy::build`] or
    /// [`InstanceSynthesizer::synthesize`].
    pub fn build<R: Rng + ?Sized>(
        rows: &[Row],
        config: &CatalogConfig,
        rng: &mut R,
    ) -> Result<Self, CatalogError> {
        config.validate()?;
        let taxonomy = Taxonomy::build(rows, config.strict)?;
        let instances =
            InstanceSynthesizer::new(&taxonomy, &config.policy, config.strict.collisions, rng)
                .synthesize_all(rows)?;
        info!(instances = instances.len(), "synthesized instances");
        Ok(Self {
            taxonomy,
            instances,
        })
    }

    /// Builds the catalog with a seeded generator when `config.seed` is set,
    /// or an entropy-seeded one otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::build`].
    pub fn build_default(rows: &[Row], config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::build(rows, config, &mut rng)
    }

    /// Number of category classes.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.taxonomy.categories().len()
    }

    /// Number of subcategory classes.
    #[must_use]
    pub fn subcategory_count(&self) -> usize {
        self.taxonomy.subcategories().len()
    }

    /// Number of type classes.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.taxonomy.types().len()
    }

    /// Number of instances.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::model::Row;

    pub(crate) fn row(id: &str, name: &str, category: &str, subcategory: &str, type_: &str) -> Row {
        Row {
            id: id.to_owned(),
            name: name.to_owned(),
            category: category.to_owned(),
            subcategory: subcategory.to_owned(),
            type_: type_.to_owned(),
            brand: "FarmCo".to_owned(),
            price: 1.5,
            quantity: "1kg".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::testing::row;

    fn grocery() -> Vec<Row> {
        vec![
            row("P1", "Fuji Apple", "Fruit", "Apple", "Apple"),
            row("P2", "Blood Orange", "Fruit", "Citrus", "Orange"),
            row("P3", "Key Lime", "Fruit", "Citrus", "Lime"),
            row("P4", "Kitchen Sponge", "Household", "Cleaning", "Sponge"),
            row("P5", "Feather Duster", "Household", "Cleaning", "Duster"),
        ]
    }

    #[test]
    fn counts_equal_distinct_labels() {
        let rows = grocery();
        let catalog = Catalog::build_default(&rows, &CatalogConfig::default()).unwrap();
        let distinct = |f: fn(&Row) -> &str| rows.iter().map(f).collect::<HashSet<_>>().len();
        assert_eq!(catalog.category_count(), distinct(|r| r.category.as_str()));
        assert_eq!(catalog.subcategory_count(), distinct(|r| r.subcategory.as_str()));
        assert_eq!(catalog.type_count(), distinct(|r| r.type_.as_str()));
        assert_eq!(catalog.instance_count(), rows.len());
    }

    #[test]
    fn structure_is_independent_of_the_seed() {
        let rows = grocery();
        let a = Catalog::build(&rows, &CatalogConfig::default(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        let b = Catalog::build(&rows, &CatalogConfig::default(), &mut StdRng::seed_from_u64(2))
            .unwrap();
        let ids = |c: &Catalog| c.instances.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(
            a.taxonomy.nodes().collect::<Vec<_>>(),
            b.taxonomy.nodes().collect::<Vec<_>>()
        );
    }

    #[test]
    fn invalid_config_is_rejected_before_building() {
        let config = CatalogConfig {
            policy: InstancePolicy {
                discount_candidates: Vec::new(),
                ..InstancePolicy::default()
            },
            ..CatalogConfig::default()
        };
        let err = Catalog::build_default(&grocery(), &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
