//! Run configuration.
//!
//! Policy values that the input does not supply (availability, stock,
//! discount candidates), strictness switches, the optional discount seed, and
//! the immutable prefix table handed to the document assembler.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::model::iris;

/// Instance attributes that come from policy rather than from the input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstancePolicy {
    /// Availability flag given to every instance.
    pub default_availability: bool,
    /// Stock count given to every instance.
    pub default_stock: i64,
    /// Discount values drawn from, uniformly, once per instance.
    pub discount_candidates: Vec<u32>,
}

impl Default for InstancePolicy {
    fn default() -> Self {
        Self {
            default_availability: true,
            default_stock: 10,
            discount_candidates: vec![0, 5, 10, 15, 20, 25, 30],
        }
    }
}

/// What to do when two claimants map to the same identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// The later claimant silently reuses the earlier identifier.
    #[default]
    Alias,
    /// Fail the run with [`CatalogError::Collision`].
    Reject,
    /// Instances whose name identifier is taken get `_<row id>` appended.
    /// Class collisions alias as under [`CollisionPolicy::Alias`].
    SuffixRowId,
}

/// Strictness switches; all off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrictMode {
    /// Identifier collision handling.
    pub collisions: CollisionPolicy,
    /// Fail with [`CatalogError::ParentConflict`] when a subcategory or type
    /// label appears under more than one parent, instead of keeping the
    /// first-seen parent.
    pub parent_consistency: bool,
}

/// Complete configuration of one run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Policy constants for synthesized instances.
    pub policy: InstancePolicy,
    /// Strictness switches.
    pub strict: StrictMode,
    /// Seed for the discount draw; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl CatalogConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the text is not valid TOML, has
    /// unknown keys, or fails [`CatalogConfig::validate`].
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig = toml::from_str(text).map_err(|e| CatalogError::Config {
            path: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|e| CatalogError::Config {
            path: Some(path.to_path_buf()),
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml(&text).map_err(|e| match e {
            CatalogError::Config { message, .. } => CatalogError::Config {
                path: Some(path.to_path_buf()),
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })
    }

    /// Applies command-line overrides on top of a loaded configuration.
    ///
    /// A given `seed` replaces the configured one; `strict_collisions`
    /// switches collisions to [`CollisionPolicy::Reject`]; `strict_parents`
    /// turns on parent consistency. Unset flags leave the configuration as is.
    #[must_use]
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        strict_collisions: bool,
        strict_parents: bool,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if strict_collisions {
            self.strict.collisions = CollisionPolicy::Reject;
        }
        if strict_parents {
            self.strict.parent_consistency = true;
        }
        self
    }

    /// Checks values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the discount candidate list is
    /// empty or the default stock is negative.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.policy.discount_candidates.is_empty() {
            return Err(CatalogError::Config {
                path: None,
                message: "policy.discount_candidates must not be empty".to_owned(),
            });
        }
        if self.policy.default_stock < 0 {
            return Err(CatalogError::Config {
                path: None,
                message: format!(
                    "policy.default_stock must be 0 or greater, got {}",
                    self.policy.default_stock
                ),
            });
        }
        Ok(())
    }
}

/// Immutable prefix → namespace table for the ontology document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefixes {
    entries: &'static [(&'static str, &'static str)],
    base: &'static str,
    ontology: &'static str,
}

const STANDARD_PREFIXES: &[(&str, &str)] = &[
    ("", iris::BASE),
    ("gr", iris::GR),
    ("owl", iris::OWL),
    ("pto", iris::PTO),
    ("rdf", iris::RDF),
    ("xml", iris::XML),
    ("xsd", iris::XSD),
    ("rdfs", iris::RDFS),
];

impl Prefixes {
    /// The prefix table the shop ontology has always been published with.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_PREFIXES,
            base: iris::BASE,
            ontology: iris::ONTOLOGY,
        }
    }

    /// `(prefix, namespace IRI)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// The `@base` IRI.
    #[must_use]
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// IRI of the `owl:Ontology` resource.
    #[must_use]
    pub fn ontology(&self) -> &'static str {
        self.ontology
    }

    /// Looks up the namespace bound to `prefix`.
    #[must_use]
    pub fn namespace(&self, prefix: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, iri)| *iri)
    }

    /// Expands a CURIE such as `pto:Apple` to its full IRI.
    ///
    /// Returns `None` if the CURIE has no `:` or its prefix is unbound.
    #[must_use]
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = curie.split_once(':')?;
        self.namespace(prefix).map(|ns| format!("{ns}{local}"))
    }
}

impl Default for Prefixes {
    fn default() -> Self {
        Self::standard()
    }
}
