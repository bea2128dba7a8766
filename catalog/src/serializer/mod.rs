//! Serializers for the catalog documents.
//!
//! Two documents are produced per run:
//! - **Ontology** ([`turtle`]): classes, properties and instances, output to `Products.ttl`
//! - **Shapes** ([`shacl`]): SHACL constraints, output to `Shacl_shapes.ttl`

pub mod shacl;
pub mod turtle;
