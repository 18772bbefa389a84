//! Error handling for dripsketch.
//!
//! Editor mutations and rendering never fail (unknown ids and malformed
//! records degrade to no-ops/skips), so these errors only surface from the
//! serialization and template-catalog APIs.

use thiserror::Error;

/// Dripsketch error type.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A shape record carried a `type` tag outside the known vocabulary.
    #[error("unknown shape type: {found}")]
    UnknownShapeKind {
        /// The unrecognized `type` value.
        found: String,
    },

    /// Layout JSON could not be parsed at all.
    #[error("failed to decode layout: {0}")]
    Decode(String),

    /// Layout could not be serialized.
    #[error("failed to encode layout: {0}")]
    Encode(String),

    /// No standard layout is registered under the requested key.
    #[error("standard layout not found: {key}")]
    LayoutNotFound {
        /// The requested catalog key.
        key: String,
    },
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, Error>;
