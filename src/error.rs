// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system. Each
//! variant carries the offending field, category, or rule names as structured
//! data so callers can surface precise diagnostics without string matching.

use crate::types::{PageType, QuestionCategory, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// The raw input record was rejected by the normalizer. Fatal for the
    /// entire run — every page depends on the normalized product.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The question template table could not meet a category minimum.
    /// A configuration defect, fatal for the entire run.
    #[error(
        "Question coverage below minimum for category '{category}': produced {produced}, required {required}"
    )]
    InsufficientCoverage {
        category: QuestionCategory,
        produced: usize,
        required: usize,
    },

    /// No answer rule exists for a question's category. Recoverable — the
    /// FAQ block drops the item and continues.
    #[error("No answer rule for question category '{category}'")]
    UnansweredQuestion { category: QuestionCategory },

    /// A block output required by the page template was never produced.
    /// Fatal for that page type only.
    #[error("Missing block output '{block}' while assembling the {page_type} page")]
    MissingBlock {
        page_type: PageType,
        block: &'static str,
    },

    /// A required template field has no satisfying block output. Never
    /// silently defaulted; fatal for that page type only.
    #[error("No block output satisfies required field '{field}' on the {page_type} page")]
    MissingField {
        page_type: PageType,
        field: &'static str,
    },

    /// The assembled document violated one or more template rules. Carries
    /// the complete violation list; fatal for that page type only.
    #[error("Validation failed for the {page_type} page: {}", violations.join(", "))]
    TemplateValidation {
        page_type: PageType,
        violations: Vec<String>,
    },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error for {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize the {page_type} document: {source}")]
    Serialization {
        page_type: PageType,
        source: serde_json::Error,
    },

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("{failed} of {total} page(s) failed to synthesize")]
    PagesFailed { failed: usize, total: usize },
}

impl AppError {
    /// Whether this error aborts a single page type rather than the whole run.
    ///
    /// Template assembly and validation failures are scoped: the other page
    /// types still attempt to complete. Normalization and question-generation
    /// failures are not, since every page depends on their output.
    pub fn is_page_scoped(&self) -> bool {
        matches!(
            self,
            Self::MissingBlock { .. } | Self::MissingField { .. } | Self::TemplateValidation { .. }
        )
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_errors_are_page_scoped() {
        let err = AppError::TemplateValidation {
            page_type: PageType::Faq,
            violations: vec!["min_questions".to_string()],
        };
        assert!(err.is_page_scoped());

        let err = AppError::InsufficientCoverage {
            category: QuestionCategory::Safety,
            produced: 1,
            required: 4,
        };
        assert!(!err.is_page_scoped());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = AppError::from(ValidationError::MissingField("price"));
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn template_validation_lists_every_violation() {
        let err = AppError::TemplateValidation {
            page_type: PageType::Faq,
            violations: vec!["min_questions".to_string(), "category_coverage".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("min_questions"));
        assert!(message.contains("category_coverage"));
    }
}
