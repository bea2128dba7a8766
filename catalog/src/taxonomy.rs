//! Three-level class taxonomy.
//!
//! Scans the row set once, in row order, and keeps the first occurrence of
//! every category, subcategory and type label. Subcategories and types are
//! deduplicated by their own label alone: the parent recorded for a label is
//! the one on the row where the label first appears.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::{CollisionPolicy, StrictMode};
use crate::error::CatalogError;
use crate::model::{ClassNode, Identifier, Row, Tier};
use crate::sanitize::sanitize;

/// The deduplicated category → subcategory → type hierarchy of one row set.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    categories: Vec<ClassNode>,
    subcategories: Vec<ClassNode>,
    types: Vec<ClassNode>,
    type_ids: HashMap<String, Identifier>,
}

impl Taxonomy {
    /// Builds the taxonomy from the full ordered row set.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::ParentConflict`] if `strict.parent_consistency` is set
    ///   and a label appears under two different parents.
    /// - [`CatalogError::Collision`] if `strict.collisions` is
    ///   [`CollisionPolicy::Reject`] and two distinct labels sanitize to the
    ///   same identifier in the same identifier space.
    pub fn build(rows: &[Row], strict: StrictMode) -> Result<Self, CatalogError> {
        let mut claims = Claims::default();
        let mut categories = TierIndex::new(Tier::Category);
        let mut subcategories = TierIndex::new(Tier::Subcategory);
        let mut types = TierIndex::new(Tier::Type);

        for row in rows {
            categories.insert(&row.category, None, strict, &mut claims)?;
            subcategories.insert(
                &row.subcategory,
                Some(row.category.as_str()),
                strict,
                &mut claims,
            )?;
            types.insert(&row.type_, Some(row.subcategory.as_str()), strict, &mut claims)?;
        }

        let type_ids = types
            .nodes
            .iter()
            .map(|node| (node.label.clone(), node.id.clone()))
            .collect();

        info!(
            categories = categories.nodes.len(),
            subcategories = subcategories.nodes.len(),
            types = types.nodes.len(),
            "built taxonomy"
        );

        Ok(Self {
            categories: categories.nodes,
            subcategories: subcategories.nodes,
            types: types.nodes,
            type_ids,
        })
    }

    /// Category classes in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[ClassNode] {
        &self.categories
    }

    /// Subcategory classes in first-seen order.
    #[must_use]
    pub fn subcategories(&self) -> &[ClassNode] {
        &self.subcategories
    }

    /// Type classes in first-seen order.
    #[must_use]
    pub fn types(&self) -> &[ClassNode] {
        &self.types
    }

    /// All classes: categories, then subcategories, then types.
    pub fn nodes(&self) -> impl Iterator<Item = &ClassNode> {
        self.categories
            .iter()
            .chain(&self.subcategories)
            .chain(&self.types)
    }

    /// Classes of a single tier.
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &[ClassNode] {
        match tier {
            Tier::Category => &self.categories,
            Tier::Subcategory => &self.subcategories,
            Tier::Type => &self.types,
        }
    }

    /// Resolves a type label to the identifier of its class.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownType`] if the label was never seen while
    /// building.
    pub fn type_identifier(&self, label: &str) -> Result<&Identifier, CatalogError> {
        self.type_ids
            .get(label)
            .ok_or_else(|| CatalogError::UnknownType {
                label: label.to_owned(),
            })
    }
}

/// Which (tier, label) first produced each identifier.
#[derive(Default)]
struct Claims {
    owners: HashMap<Identifier, (Tier, String)>,
}

struct TierIndex {
    tier: Tier,
    nodes: Vec<ClassNode>,
    // label -> parent label on the first row the label appeared on
    parents: HashMap<String, Option<String>>,
}

impl TierIndex {
    fn new(tier: Tier) -> Self {
        Self {
            tier,
            nodes: Vec::new(),
            parents: HashMap::new(),
        }
    }

    fn insert(
        &mut self,
        label: &str,
        parent: Option<&str>,
        strict: StrictMode,
        claims: &mut Claims,
    ) -> Result<(), CatalogError> {
        if let Some(first_parent) = self.parents.get(label) {
            if let (Some(first), Some(second)) = (first_parent.as_deref(), parent) {
                if first != second {
                    if strict.parent_consistency {
                        return Err(CatalogError::ParentConflict {
                            tier: self.tier,
                            label: label.to_owned(),
                            first: first.to_owned(),
                            second: second.to_owned(),
                        });
                    }
                    warn!(
                        tier = %self.tier,
                        label,
                        kept = first,
                        ignored = second,
                        "label appears under more than one parent; keeping the first"
                    );
                }
            }
            return Ok(());
        }

        let id = Identifier::new(self.tier.prefix(), sanitize(label));
        match claims.owners.get(&id) {
            Some((owner_tier, owner_label)) => {
                if strict.collisions == CollisionPolicy::Reject {
                    return Err(CatalogError::Collision {
                        identifier: id.to_string(),
                        first: format!("{owner_tier} `{owner_label}`"),
                        second: format!("{} `{label}`", self.tier),
                    });
                }
                warn!(
                    identifier = %id,
                    first = %owner_label,
                    second = label,
                    "class labels alias the same identifier"
                );
            }
            None => {
                claims
                    .owners
                    .insert(id.clone(), (self.tier, label.to_owned()));
            }
        }

        let parent_id = self
            .tier
            .parent()
            .zip(parent)
            .map(|(tier, parent_label)| {
                Identifier::new(tier.prefix(), sanitize(parent_label))
            });
        debug!(tier = %self.tier, identifier = %id, parent = ?parent_id, "new class");

        self.parents
            .insert(label.to_owned(), parent.map(str::to_owned));
        self.nodes.push(ClassNode {
            id,
            label: label.to_owned(),
            tier: self.tier,
            parent: parent_id,
        });
        Ok(())
    }
}
