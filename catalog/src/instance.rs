//! Per-row product instances.
//!
//! One [`Instance`] per row, in row order. Identity comes from the sanitized
//! product name; the owning class comes from the taxonomy's type tier;
//! availability and stock come from [`InstancePolicy`]; the discount is drawn
//! from the policy's candidates with the caller's random source.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::{CollisionPolicy, InstancePolicy};
use crate::error::CatalogError;
use crate::model::{prefixes, Identifier, Instance, Row};
use crate::sanitize::sanitize;
use crate::taxonomy::Taxonomy;

/// Turns rows into instances against a built [`Taxonomy`].
///
/// Keeps track of the identifiers it has handed out so collisions between
/// rows can be aliased, rejected or disambiguated.
pub struct InstanceSynthesizer<'a, R: Rng + ?Sized> {
    taxonomy: &'a Taxonomy,
    policy: &'a InstancePolicy,
    collisions: CollisionPolicy,
    rng: &'a mut R,
    // instance local name -> product id of the row that first claimed it
    claimed: HashMap<String, String>,
}

impl<'a, R: Rng + ?Sized> InstanceSynthesizer<'a, R> {
    /// Creates a synthesizer drawing discounts from `rng`.
    pub fn new(
        taxonomy: &'a Taxonomy,
        policy: &'a InstancePolicy,
        collisions: CollisionPolicy,
        rng: &'a mut R,
    ) -> Self {
        Self {
            taxonomy,
            policy,
            collisions,
            rng,
            claimed: HashMap::new(),
        }
    }

    /// Synthesizes the instance for one row.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownType`] if the row's type label is not in the
    ///   taxonomy.
    /// - [`CatalogError::Collision`] if the name identifier is already taken
    ///   and the collision policy is [`CollisionPolicy::Reject`], or if the
    ///   suffixed identifier is taken too under
    ///   [`CollisionPolicy::SuffixRowId`].
    /// - [`CatalogError::Config`] if the policy has no discount candidates.
    pub fn synthesize(&mut self, row: &Row) -> Result<Instance, CatalogError> {
        let id = self.claim(row)?;
        let type_id = self.taxonomy.type_identifier(&row.type_)?.clone();

        let discount = *self
            .policy
            .discount_candidates
            .choose(&mut *self.rng)
            .ok_or_else(|| CatalogError::Config {
                path: None,
                message: "policy.discount_candidates must not be empty".to_owned(),
            })?;

        debug!(identifier = %id, class = %type_id, discount, "new instance");

        Ok(Instance {
            id,
            type_id,
            product_id: row.id.clone(),
            brand: row.brand.clone(),
            price: row.price,
            discount,
            quantity: row.quantity.clone(),
            available: self.policy.default_availability,
            stock: self.policy.default_stock,
            name: row.name.clone(),
        })
    }

    /// Synthesizes every row, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first row that fails; see [`InstanceSynthesizer::synthesize`].
    pub fn synthesize_all(&mut self, rows: &[Row]) -> Result<Vec<Instance>, CatalogError> {
        rows.iter().map(|row| self.synthesize(row)).collect()
    }

    fn claim(&mut self, row: &Row) -> Result<Identifier, CatalogError> {
        let local = sanitize(&row.name);
        let Some(first) = self.claimed.get(&local) else {
            self.claimed.insert(local.clone(), row.id.clone());
            return Ok(Identifier::new(prefixes::BASE, local));
        };

        match self.collisions {
            CollisionPolicy::Alias => {
                warn!(
                    identifier = %Identifier::new(prefixes::BASE, local.as_str()),
                    first = %first,
                    second = %row.id,
                    "rows alias the same instance identifier"
                );
                Ok(Identifier::new(prefixes::BASE, local))
            }
            CollisionPolicy::Reject => Err(collision(&local, first, &row.id)),
            CollisionPolicy::SuffixRowId => {
                let suffixed = format!("{local}_{}", sanitize(&row.id));
                if let Some(owner) = self.claimed.get(&suffixed) {
                    return Err(collision(&suffixed, owner, &row.id));
                }
                debug!(from = %local, to = %suffixed, "disambiguated instance by row id");
                self.claimed.insert(suffixed.clone(), row.id.clone());
                Ok(Identifier::new(prefixes::BASE, suffixed))
            }
        }
    }
}

fn collision(local: &str, first: &str, second: &str) -> CatalogError {
    CatalogError::Collision {
        identifier: Identifier::new(prefixes::BASE, local).to_string(),
        first: format!("row `{first}`"),
        second: format!("row `{second}`"),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::StrictMode;
    use crate::error::ErrorKind;
    use crate::testing::row;

    fn fuji_rows() -> Vec<Row> {
        let mut second = row("P2", "Fuji Apple", "Fruit", "Apple", "Apple");
        second.price = 1.6;
        second.quantity = "2kg".to_owned();
        vec![row("P1", "Fuji Apple", "Fruit", "Apple", "Apple"), second]
    }

    fn synthesize(rows: &[Row], collisions: CollisionPolicy) -> Result<Vec<Instance>, CatalogError> {
        let taxonomy = Taxonomy::build(rows, StrictMode::default())?;
        let policy = InstancePolicy::default();
        let mut rng = StdRng::seed_from_u64(42);
        InstanceSynthesizer::new(&taxonomy, &policy, collisions, &mut rng).synthesize_all(rows)
    }

    #[test]
    fn one_instance_per_row_in_order() {
        let instances = synthesize(&fuji_rows(), CollisionPolicy::Alias).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].product_id, "P1");
        assert_eq!(instances[1].product_id, "P2");
        assert_eq!(instances[1].quantity, "2kg");
        assert!((instances[1].price - 1.6).abs() < f64::EPSILON);
    }

    #[test]
    fn duplicate_names_alias_by_default() {
        let instances = synthesize(&fuji_rows(), CollisionPolicy::Alias).unwrap();
        assert_eq!(instances[0].id.to_string(), ":Fuji_Apple");
        assert_eq!(instances[0].id, instances[1].id);
        assert_eq!(instances[0].name, "Fuji Apple");
        assert_eq!(instances[0].type_id.to_string(), "pto:Apple");
    }

    #[test]
    fn duplicate_names_rejected_in_strict_mode() {
        let err = synthesize(&fuji_rows(), CollisionPolicy::Reject).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Collision);
        assert_eq!(
            err.to_string(),
            "identifier `:Fuji_Apple` claimed by row `P1` and by row `P2`"
        );
    }

    #[test]
    fn duplicate_names_suffixed_by_row_id() {
        let instances = synthesize(&fuji_rows(), CollisionPolicy::SuffixRowId).unwrap();
        assert_eq!(instances[0].id.local(), "Fuji_Apple");
        assert_eq!(instances[1].id.local(), "Fuji_Apple_P2");
    }

    #[test]
    fn suffix_collision_is_an_error() {
        let rows = vec![
            row("P2", "Gala", "Fruit", "Apple", "Apple"),
            row("P2", "Gala", "Fruit", "Apple", "Apple"),
            row("P2", "Gala", "Fruit", "Apple", "Apple"),
        ];
        let err = synthesize(&rows, CollisionPolicy::SuffixRowId).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Collision);
    }

    #[test]
    fn policy_constants_apply_to_every_instance() {
        let rows = fuji_rows();
        let taxonomy = Taxonomy::build(&rows, StrictMode::default()).unwrap();
        let policy = InstancePolicy {
            default_availability: false,
            default_stock: 3,
            discount_candidates: vec![15],
        };
        let mut rng = StdRng::seed_from_u64(0);
        let instances = InstanceSynthesizer::new(&taxonomy, &policy, CollisionPolicy::Alias, &mut rng)
            .synthesize_all(&rows)
            .unwrap();
        for instance in &instances {
            assert!(!instance.available);
            assert_eq!(instance.stock, 3);
            assert_eq!(instance.discount, 15);
        }
    }

    #[test]
    fn discounts_come_from_candidates_and_follow_the_seed() {
        let rows: Vec<Row> = (0..50)
            .map(|i| row(&format!("P{i}"), &format!("Item {i}"), "Fruit", "Apple", "Apple"))
            .collect();
        let first = synthesize(&rows, CollisionPolicy::Alias).unwrap();
        let second = synthesize(&rows, CollisionPolicy::Alias).unwrap();
        let candidates = InstancePolicy::default().discount_candidates;
        for (a, b) in first.iter().zip(&second) {
            assert!(candidates.contains(&a.discount));
            assert_eq!(a.discount, b.discount);
        }
    }

    #[test]
    fn unknown_type_is_a_lookup_error() {
        let built_from = vec![row("P1", "Gala", "Fruit", "Apple", "Apple")];
        let taxonomy = Taxonomy::build(&built_from, StrictMode::default()).unwrap();
        let policy = InstancePolicy::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut synthesizer =
            InstanceSynthesizer::new(&taxonomy, &policy, CollisionPolicy::Alias, &mut rng);
        let err = synthesizer
            .synthesize(&row("P2", "Kiwi", "Fruit", "Exotic", "Kiwi"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn empty_candidates_fail() {
        let rows = vec![row("P1", "Gala", "Fruit", "Apple", "Apple")];
        let taxonomy = Taxonomy::build(&rows, StrictMode::default()).unwrap();
        let policy = InstancePolicy {
            discount_candidates: Vec::new(),
            ..InstancePolicy::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let err = InstanceSynthesizer::new(&taxonomy, &policy, CollisionPolicy::Alias, &mut rng)
            .synthesize(&rows[0])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
