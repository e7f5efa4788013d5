// src/types/domain_types.rs
//! Domain-specific newtypes and closed enums for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, non-negative product price.
///
/// Constructed only through [`Price::new`], so a `Price` held anywhere in the
/// pipeline is known to be finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Create a new price with validation.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "price",
                value,
            });
        }
        Ok(Self(value))
    }

    /// Get the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

// Manual Deserialize so a Price read back from JSON is re-validated.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Price::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// The closed set of question classifications.
///
/// `ALL` fixes the emission order: questions and FAQ sections are always
/// grouped by category in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Informational,
    Usage,
    Safety,
    Purchase,
    Comparison,
}

impl QuestionCategory {
    /// All categories in the fixed emission order.
    pub const ALL: [QuestionCategory; 5] = [
        QuestionCategory::Informational,
        QuestionCategory::Usage,
        QuestionCategory::Safety,
        QuestionCategory::Purchase,
        QuestionCategory::Comparison,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Usage => "usage",
            Self::Safety => "safety",
            Self::Purchase => "purchase",
            Self::Comparison => "comparison",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of page types the pipeline produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    Faq,
    Product,
    Comparison,
}

impl PageType {
    /// All page types in the fixed synthesis order.
    pub const ALL: [PageType; 3] = [PageType::Faq, PageType::Product, PageType::Comparison];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Faq => "faq",
            Self::Product => "product",
            Self::Comparison => "comparison",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
