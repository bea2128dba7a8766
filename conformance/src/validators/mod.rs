//! Artifact validators. Each returns a [`crate::ConformanceReport`].

pub mod inventory;
pub mod shacl;
pub mod turtle;
