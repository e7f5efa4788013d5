// src/questions/mod.rs
//! The question generator: derives the categorized question set from a
//! normalized product.
//!
//! Deterministic by construction — output depends on the input product only.
//! Per-category minimum counts are enforced as a post-condition; falling
//! short is a template-table configuration defect, never silently emitted.

mod templates;

use crate::constants::{
    MIN_COMPARISON_QUESTIONS, MIN_INFORMATIONAL_QUESTIONS, MIN_PURCHASE_QUESTIONS,
    MIN_SAFETY_QUESTIONS, MIN_TOTAL_QUESTIONS, MIN_USAGE_QUESTIONS,
};
use crate::error::AppError;
use crate::model::{Product, UserQuestion};
use crate::types::QuestionCategory;
use indexmap::IndexSet;
use templates::templates_for;

/// The contract minimum for one category.
pub(crate) fn minimum_for(category: QuestionCategory) -> usize {
    match category {
        QuestionCategory::Informational => MIN_INFORMATIONAL_QUESTIONS,
        QuestionCategory::Usage => MIN_USAGE_QUESTIONS,
        QuestionCategory::Safety => MIN_SAFETY_QUESTIONS,
        QuestionCategory::Purchase => MIN_PURCHASE_QUESTIONS,
        QuestionCategory::Comparison => MIN_COMPARISON_QUESTIONS,
    }
}

/// Generates the full question set for a product.
///
/// Output order is stable: grouped by category in `QuestionCategory::ALL`
/// order, templates within a category in declaration order. A template is
/// skipped only when its required field is empty; if that leaves a category
/// below its minimum, the generator fails with
/// [`AppError::InsufficientCoverage`] naming the category.
pub fn generate_questions(product: &Product) -> Result<Vec<UserQuestion>, AppError> {
    let mut seen = IndexSet::new();
    let mut questions = Vec::new();

    for category in QuestionCategory::ALL {
        let mut produced = 0usize;

        for template in templates_for(category) {
            let Some(text) = template.render(product) else {
                log::debug!(
                    "Skipping {} template '{}': field '{}' is empty",
                    category,
                    template.pattern,
                    template.requires.as_str()
                );
                continue;
            };

            // Duplicate text never counts twice toward a minimum.
            if !seen.insert(text.clone()) {
                log::debug!("Skipping duplicate question text: {}", text);
                continue;
            }

            questions.push(UserQuestion { text, category });
            produced += 1;
        }

        let required = minimum_for(category);
        if produced < required {
            return Err(AppError::InsufficientCoverage {
                category,
                produced,
                required,
            });
        }
    }

    // The per-category minimums sum past the total floor, so this holds
    // whenever the loop above completes.
    debug_assert!(questions.len() >= MIN_TOTAL_QUESTIONS);

    log::info!(
        "Generated {} questions across {} categories for '{}'",
        questions.len(),
        QuestionCategory::ALL.len(),
        product.name
    );
    Ok(questions)
}
