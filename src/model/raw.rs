// src/model/raw.rs
//! The loosely-typed external record at the pre-normalization boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An external product record as loaded from JSON, before normalization.
///
/// No invariants hold here: fields may be absent, list fields may be JSON
/// arrays or delimiter-joined strings, and `price` may be a number or a
/// numeric-looking string. The normalizer is the only consumer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProductInput {
    pub name: Option<String>,

    pub description: Option<String>,

    /// List field: JSON array of strings or a `,`/`;`/`|`-joined string.
    pub ingredients: Option<Value>,

    /// List field, same encodings as `ingredients`.
    pub benefits: Option<Value>,

    /// List field, same encodings as `ingredients`.
    #[serde(alias = "skinTypes")]
    pub skin_types: Option<Value>,

    #[serde(alias = "usageInstructions")]
    pub usage_instructions: Option<String>,

    /// Number or numeric-looking string (an optional leading `$` is accepted).
    pub price: Option<Value>,

    /// List field, same encodings as `ingredients`.
    #[serde(alias = "sizeOptions")]
    pub size_options: Option<Value>,

    #[serde(alias = "safetyNotes")]
    pub safety_notes: Option<String>,

    /// Optional active-ingredient percentage; number or numeric-looking
    /// string (an optional trailing `%` is accepted).
    pub concentration: Option<Value>,
}
