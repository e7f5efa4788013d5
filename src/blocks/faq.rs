// src/blocks/faq.rs
//! FAQ item block: pairs each derived question with an answer synthesized
//! from the product fields relevant to its category.

use crate::error::AppError;
use crate::model::{Product, UserQuestion};
use crate::types::QuestionCategory;
use serde::Serialize;

/// One question/answer pair on the FAQ page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    pub category: QuestionCategory,
}

/// An answer rule maps a product to the answer text for one category.
type AnswerRule = fn(&Product) -> String;

/// Per-category answer rules, as a lookup table rather than a match, so a
/// category without a rule is an observable (recoverable) condition instead
/// of a compile error hidden by a wildcard arm.
const ANSWER_RULES: &[(QuestionCategory, AnswerRule)] = &[
    (QuestionCategory::Informational, informational_answer),
    (QuestionCategory::Usage, usage_answer),
    (QuestionCategory::Safety, safety_answer),
    (QuestionCategory::Purchase, purchase_answer),
    (QuestionCategory::Comparison, comparison_answer),
];

/// Builds one FAQ item per question.
///
/// A question whose category has no answer rule is dropped with a warning —
/// a defensive path that never triggers for the built-in category set.
pub fn build_faq_items_block(product: &Product, questions: &[UserQuestion]) -> Vec<FaqItem> {
    questions
        .iter()
        .filter_map(|question| match answer_for(product, question.category) {
            Ok(answer) => Some(FaqItem {
                question: question.text.clone(),
                answer,
                category: question.category,
            }),
            Err(error) => {
                log::warn!("Dropping question '{}': {}", question.text, error);
                None
            }
        })
        .collect()
}

fn answer_for(product: &Product, category: QuestionCategory) -> Result<String, AppError> {
    ANSWER_RULES
        .iter()
        .find(|(rule_category, _)| *rule_category == category)
        .map(|(_, rule)| rule(product))
        .ok_or(AppError::UnansweredQuestion { category })
}

// --- Answer rules ---

fn informational_answer(product: &Product) -> String {
    format!(
        "{} Key ingredients: {}. Known benefits: {}.",
        with_period(&product.description),
        product.ingredients.join(", "),
        product.benefits.join(", ")
    )
}

fn usage_answer(product: &Product) -> String {
    format!(
        "{} Suitable for {} skin.",
        with_period(&product.usage_instructions),
        product.skin_types.join(", ")
    )
}

fn safety_answer(product: &Product) -> String {
    with_period(&product.safety_notes)
}

fn purchase_answer(product: &Product) -> String {
    format!(
        "{} is priced at {}. Available sizes: {}.",
        product.name,
        product.price,
        product.size_options.join(", ")
    )
}

fn comparison_answer(product: &Product) -> String {
    format!(
        "{} offers {} documented benefits: {}. See the comparison page for a field-by-field breakdown.",
        product.name,
        product.benefits.len(),
        product.benefits.join(", ")
    )
}

/// Ensures the text ends with a period so composed answers read as sentences.
fn with_period(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;
    use pretty_assertions::assert_eq;

    fn sample_product() -> Product {
        Product {
            name: "GlowBoost Vitamin C Serum".to_string(),
            description: "A brightening vitamin C serum".to_string(),
            ingredients: vec!["Vitamin C".to_string(), "Hyaluronic Acid".to_string()],
            benefits: vec!["Brightens skin tone".to_string(), "Deeply hydrates".to_string()],
            skin_types: vec!["oily".to_string()],
            usage_instructions: "Apply every morning".to_string(),
            price: Price::new(29.99).unwrap(),
            size_options: vec!["30ml".to_string()],
            safety_notes: "Patch test first".to_string(),
            concentration: Some(15.0),
        }
    }

    fn sample_questions() -> Vec<UserQuestion> {
        QuestionCategory::ALL
            .iter()
            .map(|&category| UserQuestion {
                text: format!("A {} question?", category),
                category,
            })
            .collect()
    }

    #[test]
    fn one_item_per_question() {
        let questions = sample_questions();
        let items = build_faq_items_block(&sample_product(), &questions);
        assert_eq!(items.len(), questions.len());
    }

    #[test]
    fn item_category_matches_source_question() {
        let questions = sample_questions();
        let items = build_faq_items_block(&sample_product(), &questions);

        for (item, question) in items.iter().zip(&questions) {
            assert_eq!(item.category, question.category);
            assert_eq!(item.question, question.text);
        }
    }

    #[test]
    fn every_builtin_category_has_an_answer_rule() {
        let product = sample_product();
        for category in QuestionCategory::ALL {
            assert!(answer_for(&product, category).is_ok(), "{}", category);
        }
    }

    #[test]
    fn answers_are_drawn_from_category_relevant_fields() {
        let product = sample_product();

        assert!(answer_for(&product, QuestionCategory::Safety)
            .unwrap()
            .contains("Patch test first"));
        assert!(answer_for(&product, QuestionCategory::Purchase)
            .unwrap()
            .contains("$29.99"));
        assert!(answer_for(&product, QuestionCategory::Usage)
            .unwrap()
            .contains("Apply every morning"));
        assert!(answer_for(&product, QuestionCategory::Informational)
            .unwrap()
            .contains("Vitamin C"));
    }

    #[test]
    fn answers_end_as_sentences() {
        let product = sample_product();
        let answer = answer_for(&product, QuestionCategory::Safety).unwrap();
        assert_eq!(answer, "Patch test first.");
    }
}
