// src/model/product.rs
//! The strict, normalized product record.

use crate::types::Price;
use serde::{Deserialize, Serialize};

/// A normalized product record.
///
/// Produced only by the normalizer. Every field is present and correctly
/// typed; every list is trimmed, non-empty, de-duplicated, and keeps its
/// source order. Immutable for the lifetime of a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub skin_types: Vec<String>,
    pub usage_instructions: String,
    pub price: Price,
    pub size_options: Vec<String>,
    pub safety_notes: String,
    /// Active-ingredient percentage, when the source record declares one.
    pub concentration: Option<f64>,
}
