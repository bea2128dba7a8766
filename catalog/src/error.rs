//! Error type for the catalog pipeline.
//!
//! Every error is fatal: the batch job has no per-row recovery, and documents
//! are only written once fully assembled.

use std::path::PathBuf;

use crate::model::Tier;

/// Coarse classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file does not exist.
    MissingInput,
    /// A required column is absent, a row does not decode, or the taxonomy
    /// is inconsistent.
    Schema,
    /// The instance synthesizer referenced a type the taxonomy never built.
    Lookup,
    /// Two distinct labels or rows claimed the same identifier.
    Collision,
    /// The run configuration is unreadable or invalid.
    Configuration,
    /// Any other I/O failure.
    Io,
}

/// Errors produced while reading, building, or configuring a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The input file does not exist.
    #[error("input file {} not found", .path.display())]
    MissingInput {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The header lacks a required column.
    #[error("required column `{column}` is missing from the input header")]
    MissingColumn {
        /// Name of the first missing column.
        column: &'static str,
    },

    /// A record could not be decoded into a row.
    #[error("malformed row at line {line}: {source}")]
    MalformedRow {
        /// 1-based line in the input file.
        line: u64,
        /// Underlying decoder error.
        #[source]
        source: csv::Error,
    },

    /// A decoded field holds an unacceptable value.
    #[error("invalid `{column}` at line {line}: {message}")]
    InvalidField {
        /// 1-based line in the input file.
        line: u64,
        /// Column name.
        column: &'static str,
        /// What is wrong with the value.
        message: String,
    },

    /// A label is declared under two different parents.
    #[error("{tier} `{label}` declared under `{first}` and later under `{second}`")]
    ParentConflict {
        /// Tier of the conflicting label.
        tier: Tier,
        /// The conflicting label.
        label: String,
        /// Parent label seen first.
        first: String,
        /// Parent label seen later.
        second: String,
    },

    /// A row references a type label the taxonomy does not know.
    #[error("type `{label}` has no class in the taxonomy")]
    UnknownType {
        /// The unresolved type label.
        label: String,
    },

    /// Two claimants map to the same identifier.
    #[error("identifier `{identifier}` claimed by {first} and by {second}")]
    Collision {
        /// The contested identifier, as a CURIE.
        identifier: String,
        /// Description of the first claimant.
        first: String,
        /// Description of the second claimant.
        second: String,
    },

    /// The configuration file could not be read or holds invalid values.
    #[error("invalid configuration: {message}")]
    Config {
        /// Configuration file, if the configuration came from one.
        path: Option<PathBuf>,
        /// What is wrong.
        message: String,
    },

    /// Any other I/O failure.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::MissingInput { .. } => ErrorKind::MissingInput,
            CatalogError::MissingColumn { .. }
            | CatalogError::MalformedRow { .. }
            | CatalogError::InvalidField { .. }
            | CatalogError::ParentConflict { .. } => ErrorKind::Schema,
            CatalogError::UnknownType { .. } => ErrorKind::Lookup,
            CatalogError::Collision { .. } => ErrorKind::Collision,
            CatalogError::Config { .. } => ErrorKind::Configuration,
            CatalogError::Io { .. } => ErrorKind::Io,
        }
    }
}
