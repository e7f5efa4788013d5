// src/template/validate.rs
//! Post-assembly validation: runs every rule in the template definition and
//! returns the complete list of violated rule names.
//!
//! Callers need complete diagnostics, so validation never stops at the first
//! failed rule. A document that fails any rule is never emitted.

use super::definition::TemplateDefinition;
use crate::model::PageDocument;

/// Checks a document against its template definition.
///
/// `Ok(())` when every rule holds; otherwise the names of all violated
/// rules, in definition order.
pub fn validate(
    document: &PageDocument,
    definition: &TemplateDefinition,
) -> Result<(), Vec<&'static str>> {
    let violations: Vec<&'static str> = definition
        .rules
        .iter()
        .filter(|rule| !(rule.predicate)(document))
        .map(|rule| rule.name)
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        log::warn!(
            "{} page failed {} validation rule(s): {}",
            definition.page_type,
            violations.len(),
            violations.join(", ")
        );
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::super::definition::definition_for;
    use super::*;
    use crate::blocks::FaqItem;
    use crate::model::{ComparisonPage, FaqPage, FaqSection};
    use crate::types::{PageType, QuestionCategory};
    use pretty_assertions::assert_eq;

    fn faq_page_with(count: usize) -> PageDocument {
        let items = (0..count)
            .map(|i| FaqItem {
                question: format!("Question {}?", i),
                answer: "An answer.".to_string(),
                category: QuestionCategory::Informational,
            })
            .collect();

        PageDocument::Faq(FaqPage {
            product_name: "GlowBoost".to_string(),
            sections: vec![FaqSection {
                category: QuestionCategory::Informational,
                items,
            }],
        })
    }

    #[test]
    fn too_few_questions_violates_min_questions() {
        let document = faq_page_with(10);
        let violations = validate(&document, definition_for(PageType::Faq)).unwrap_err();
        assert!(violations.contains(&"min_questions"));
    }

    #[test]
    fn enough_questions_pass() {
        let document = faq_page_with(15);
        assert!(validate(&document, definition_for(PageType::Faq)).is_ok());
    }

    #[test]
    fn all_violations_are_reported_together() {
        // Zero items violates both the total minimum and section coverage.
        let document = PageDocument::Faq(FaqPage {
            product_name: "GlowBoost".to_string(),
            sections: vec![FaqSection {
                category: QuestionCategory::Safety,
                items: vec![],
            }],
        });

        let violations = validate(&document, definition_for(PageType::Faq)).unwrap_err();
        assert_eq!(violations, vec!["min_questions", "category_coverage"]);
    }

    #[test]
    fn empty_comparison_rows_violate_non_empty_rows() {
        let summaries = crate::blocks::build_comparison_summaries_block(
            crate::blocks::comparison_counterpart(),
            crate::blocks::comparison_counterpart(),
        );
        let document = PageDocument::Comparison(ComparisonPage {
            product_a: summaries.summary_a,
            product_b: summaries.summary_b,
            rows: vec![],
        });

        let violations =
            validate(&document, definition_for(PageType::Comparison)).unwrap_err();
        assert_eq!(violations, vec!["non_empty_rows"]);
    }

    #[test]
    fn rules_ignore_documents_of_other_page_types() {
        let document = faq_page_with(15);
        assert!(validate(&document, definition_for(PageType::Comparison)).is_ok());
    }
}
