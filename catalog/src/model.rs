//! Core catalog model types.
//!
//! These types represent one run of the catalog transformation: the rows read
//! from the tabular input, the class nodes derived from them, the product
//! instances synthesized per row, and the fixed vocabulary every document
//! carries. The top-level entry point is [`Catalog::build`](crate::Catalog::build).

use std::fmt;

use serde::Deserialize;

/// One catalog entry as read from the input.
///
/// Rows are denormalized: `category`, `subcategory` and `type` repeat verbatim
/// across every product that shares them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Row {
    /// Product id, expected unique.
    pub id: String,
    /// Human-readable product name; may contain spaces and punctuation.
    pub name: String,
    /// Top-tier class label.
    pub category: String,
    /// Middle-tier class label.
    pub subcategory: String,
    /// Product-type label, aligned with the external product-type vocabulary.
    #[serde(rename = "type")]
    pub type_: String,
    /// Brand, carried through as a literal.
    pub brand: String,
    /// Non-negative price in euro.
    pub price: f64,
    /// Package quantity, unit unspecified (e.g. `"1kg"`).
    pub quantity: String,
}

/// Columns every input must carry, in header order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "category",
    "subcategory",
    "type",
    "brand",
    "price",
    "quantity",
];

/// Taxonomy level of a [`ClassNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Local grouping directly under `gr:ProductOrService`.
    Category,
    /// Local grouping under a category.
    Subcategory,
    /// Product type from the external product-type vocabulary.
    Type,
}

impl Tier {
    /// Returns the lowercase tier name, also the input column it is read from.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Category => "category",
            Tier::Subcategory => "subcategory",
            Tier::Type => "type",
        }
    }

    /// Returns the prefix of the identifier space the tier's classes live in.
    ///
    /// Categories and subcategories share the local namespace; types live in
    /// the product-type vocabulary.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Tier::Category | Tier::Subcategory => prefixes::BASE,
            Tier::Type => prefixes::PTO,
        }
    }

    /// Returns the tier one level up, or `None` for categories.
    #[must_use]
    pub fn parent(self) -> Option<Tier> {
        match self {
            Tier::Category => None,
            Tier::Subcategory => Some(Tier::Category),
            Tier::Type => Some(Tier::Subcategory),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prefixed symbolic identifier such as `:Fuji_Apple` or `pto:Apple`.
///
/// The local part is always the output of [`sanitize`](crate::sanitize::sanitize).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    prefix: &'static str,
    local: String,
}

impl Identifier {
    /// Builds an identifier from a prefix and an already-sanitized local part.
    #[must_use]
    pub fn new(prefix: &'static str, local: impl Into<String>) -> Self {
        Self {
            prefix,
            local: local.into(),
        }
    }

    /// The namespace prefix, `""` for the local namespace.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The sanitized local part.
    #[must_use]
    pub fn local(&self) -> &str {
        &self.local
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.local)
    }
}

/// One taxonomy class derived from the row set.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassNode {
    /// Class identifier.
    pub id: Identifier,
    /// Label as it appeared in the input.
    pub label: String,
    /// Level in the three-tier hierarchy.
    pub tier: Tier,
    /// Identifier of the parent class; `None` for categories, whose parent is
    /// the fixed `gr:ProductOrService`.
    pub parent: Option<Identifier>,
}

/// One synthesized catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Instance identifier derived from the product name.
    pub id: Identifier,
    /// Identifier of the owning type-tier class.
    pub type_id: Identifier,
    /// Product id, copied from the row.
    pub product_id: String,
    /// Brand, copied from the row.
    pub brand: String,
    /// Price, copied from the row.
    pub price: f64,
    /// Promotional discount drawn from the configured candidates.
    pub discount: u32,
    /// Quantity, copied from the row.
    pub quantity: String,
    /// Availability flag; a policy constant.
    pub available: bool,
    /// Stock count; a policy constant.
    pub stock: i64,
    /// Unsanitized product name.
    pub name: String,
}

/// Whether a property is a datatype or object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`: relates a resource to a literal.
    Datatype,
    /// `owl:ObjectProperty`: relates two resources.
    Object,
}

impl PropertyKind {
    /// Returns the OWL class CURIE for this kind.
    #[must_use]
    pub fn as_curie(self) -> &'static str {
        match self {
            PropertyKind::Datatype => "owl:DatatypeProperty",
            PropertyKind::Object => "owl:ObjectProperty",
        }
    }
}

/// A fixed property declaration.
#[derive(Debug, Clone)]
pub struct Property {
    /// CURIE of the property (e.g. `":hasBrand"`).
    pub curie: &'static str,
    /// Datatype or object property.
    pub kind: PropertyKind,
    /// CURIE of the domain class.
    pub domain: &'static str,
    /// CURIE of the range class or datatype.
    pub range: &'static str,
    /// Optional `rdfs:comment`.
    pub comment: Option<&'static str>,
    /// Optional `rdfs:seeAlso` literal pointing at the property this one adapts.
    pub see_also: Option<&'static str>,
}

/// A fixed top-level class declaration.
#[derive(Debug, Clone)]
pub struct StaticClass {
    /// CURIE of the class.
    pub curie: &'static str,
    /// CURIE of the parent class, if any.
    pub subclass_of: Option<&'static str>,
    /// Optional `rdfs:comment`.
    pub comment: Option<&'static str>,
}

/// A fixed user-account instance.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// CURIE of the instance (e.g. `":Admin1"`).
    pub curie: &'static str,
    /// CURIE of the user class it instantiates.
    pub class: &'static str,
    /// Ordered `(property CURIE, string value)` assertions.
    pub fields: &'static [(&'static str, &'static str)],
}

/// Target of an `rdfs:seeAlso` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeeAlsoTarget {
    /// An IRI, written as `<...>`.
    Iri(&'static str),
    /// A plain string, written as a typed `xsd:string` literal.
    Literal(&'static str),
}

impl SeeAlsoTarget {
    /// Classifies a raw reference: anything mentioning `http` is an IRI.
    #[must_use]
    pub fn classify(value: &'static str) -> Self {
        if value.contains("http") {
            SeeAlsoTarget::Iri(value)
        } else {
            SeeAlsoTarget::Literal(value)
        }
    }
}

/// A cross-reference annotation on a product-type class.
#[derive(Debug, Clone)]
pub struct SeeAlso {
    /// Type-tier label the annotation is attached to.
    pub class_label: &'static str,
    /// Where the annotation points.
    pub target: SeeAlsoTarget,
}

/// Prefix names used in CURIEs.
pub mod prefixes {
    /// The local namespace (`:`).
    pub const BASE: &str = "";
    /// GoodRelations.
    pub const GR: &str = "gr";
    /// Product types vocabulary.
    pub const PTO: &str = "pto";
}

/// Namespace IRIs bound in the ontology document.
pub mod iris {
    /// Local namespace of the shop ontology.
    pub const BASE: &str = "http://www.semanticweb.org/My_Super/";
    /// The ontology resource itself.
    pub const ONTOLOGY: &str = "http://www.semanticweb.org/My_Super";
    /// GoodRelations namespace.
    pub const GR: &str = "http://purl.org/goodrelations/v1#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// Product types namespace.
    pub const PTO: &str = "http://www.productontology.org/id/";
    /// RDF namespace, as historically bound by the shop ontology.
    pub const RDF: &str = "http://www.w3.org/1999/02/rdf-syntax-ns#";
    /// XML namespace, as historically bound by the shop ontology.
    pub const XML: &str = "http://www.XML/1998/namespace";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// SHACL namespace.
    pub const SH: &str = "http://www.w3.org/ns/shacl#";
}
