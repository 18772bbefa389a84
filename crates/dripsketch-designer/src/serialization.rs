//! Serialization for layout documents and shape lists.
//!
//! The billing backend stores a layout as an opaque JSON blob attached to
//! a file record; this module defines that blob. Shapes serialize to flat
//! records tagged by `type` with the field names the forms were built
//! around (`strokeWidth`, `points`, ...). Persistence itself - where the
//! blob goes - belongs to the external caller.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dripsketch_core::Error;

use crate::shapes::LayoutShape;

/// Layout document format version.
const LAYOUT_FORMAT_VERSION: &str = "1.0";

/// A complete layout document: shapes plus bookkeeping metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub version: String,
    pub metadata: LayoutMetadata,
    pub shapes: Vec<LayoutShape>,
}

/// Layout metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl LayoutDocument {
    /// Creates an empty document with the current timestamps.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: LAYOUT_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            shapes: Vec::new(),
        }
    }

    /// Wraps an exported shape list in a document.
    pub fn with_shapes(name: impl Into<String>, shapes: Vec<LayoutShape>) -> Self {
        let mut doc = Self::new(name);
        doc.shapes = shapes;
        doc
    }

    /// Serializes the document to a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize layout document")
    }

    /// Parses a document from a JSON string, refreshing the modified
    /// timestamp.
    pub fn from_json_string(json: &str) -> Result<Self> {
        let mut doc: LayoutDocument =
            serde_json::from_str(json).context("Failed to parse layout document")?;
        doc.metadata.modified = Utc::now();
        Ok(doc)
    }
}

/// Serializes a bare shape list, the form the editor hands to the save
/// call.
pub fn shapes_to_json(shapes: &[LayoutShape]) -> dripsketch_core::Result<String> {
    serde_json::to_string(shapes).map_err(|e| Error::Encode(e.to_string()))
}

/// Parses a bare shape list, skipping records that fail to decode.
///
/// The editor must keep working when one stored record is malformed or
/// carries an unknown `type`, so decoding is per-record: bad entries are
/// logged and dropped, good ones survive. Only a top-level parse failure
/// (not a JSON array at all) is an error.
pub fn shapes_from_json_lenient(json: &str) -> dripsketch_core::Result<Vec<LayoutShape>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| Error::Decode(e.to_string()))?;

    let mut shapes = Vec::with_capacity(records.len());
    for record in records {
        let kind = record
            .get("type")
            .and_then(|t| t.as_str())
            .unwrap_or("<missing>")
            .to_string();
        match serde_json::from_value::<LayoutShape>(record) {
            Ok(shape) => shapes.push(shape),
            Err(e) => {
                tracing::warn!("skipping undecodable shape record (type {kind}): {e}");
            }
        }
    }
    Ok(shapes)
}
