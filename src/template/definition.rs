// src/template/definition.rs
//! Declarative template definitions: one per page type, loaded once.
//!
//! A definition is plain data — required field names, required block names,
//! and named rule predicates. New page variants are additive data, not new
//! control flow.

use crate::constants::{HERO_KEY_BENEFITS_CAP, MIN_TOTAL_QUESTIONS};
use crate::model::PageDocument;
use crate::types::PageType;
use indexmap::IndexSet;
use once_cell::sync::Lazy;

/// A named structural rule checked after assembly.
///
/// Predicates are total over `PageDocument`; a rule that does not concern a
/// document's page type passes trivially.
pub struct TemplateRule {
    pub name: &'static str,
    pub predicate: fn(&PageDocument) -> bool,
}

/// The declarative shape of one page type.
pub struct TemplateDefinition {
    pub page_type: PageType,
    pub required_fields: IndexSet<&'static str>,
    pub required_blocks: IndexSet<&'static str>,
    pub rules: Vec<TemplateRule>,
}

/// Returns the static definition for a page type.
pub fn definition_for(page_type: PageType) -> &'static TemplateDefinition {
    match page_type {
        PageType::Faq => &FAQ_TEMPLATE,
        PageType::Product => &PRODUCT_TEMPLATE,
        PageType::Comparison => &COMPARISON_TEMPLATE,
    }
}

static FAQ_TEMPLATE: Lazy<TemplateDefinition> = Lazy::new(|| TemplateDefinition {
    page_type: PageType::Faq,
    required_fields: ["product_name", "sections"].into_iter().collect(),
    required_blocks: ["faq_items"].into_iter().collect(),
    rules: vec![
        TemplateRule {
            name: "min_questions",
            predicate: min_questions,
        },
        TemplateRule {
            name: "category_coverage",
            predicate: category_coverage,
        },
    ],
});

static PRODUCT_TEMPLATE: Lazy<TemplateDefinition> = Lazy::new(|| TemplateDefinition {
    page_type: PageType::Product,
    required_fields: [
        "hero.title",
        "hero.key_benefits",
        "details.ingredients",
        "purchase.price",
    ]
    .into_iter()
    .collect(),
    required_blocks: ["hero", "details", "purchase"].into_iter().collect(),
    rules: vec![
        TemplateRule {
            name: "hero_benefits_cap",
            predicate: hero_benefits_cap,
        },
        TemplateRule {
            name: "non_empty_ingredients",
            predicate: non_empty_ingredients,
        },
    ],
});

static COMPARISON_TEMPLATE: Lazy<TemplateDefinition> = Lazy::new(|| TemplateDefinition {
    page_type: PageType::Comparison,
    required_fields: ["product_a", "product_b", "rows"].into_iter().collect(),
    required_blocks: ["comparison_summaries", "comparison_rows"]
        .into_iter()
        .collect(),
    rules: vec![TemplateRule {
        name: "non_empty_rows",
        predicate: non_empty_rows,
    }],
});

// --- Rule predicates ---

/// The FAQ carries at least the contract minimum number of items.
fn min_questions(document: &PageDocument) -> bool {
    match document {
        PageDocument::Faq(page) => page.item_count() >= MIN_TOTAL_QUESTIONS,
        _ => true,
    }
}

/// Every FAQ section present on the page has at least one item.
///
/// Sections exist for every category present in the question set, so an
/// empty section means every item of that category was dropped.
fn category_coverage(document: &PageDocument) -> bool {
    match document {
        PageDocument::Faq(page) => page.sections.iter().all(|s| !s.items.is_empty()),
        _ => true,
    }
}

fn hero_benefits_cap(document: &PageDocument) -> bool {
    match document {
        PageDocument::Product(page) => page.hero.key_benefits.len() <= HERO_KEY_BENEFITS_CAP,
        _ => true,
    }
}

fn non_empty_ingredients(document: &PageDocument) -> bool {
    match document {
        PageDocument::Product(page) => !page.details.ingredients.is_empty(),
        _ => true,
    }
}

fn non_empty_rows(document: &PageDocument) -> bool {
    match document {
        PageDocument::Comparison(page) => !page.rows.is_empty(),
        _ => true,
    }
}
