// tests/template_validation.rs
//! Template engine scenarios: assembly failures and rule violations must be
//! precise, complete, and scoped to their page type.

use product2pages::{
    assemble, build_faq_items_block, compose_page, definition_for, generate_questions, normalize,
    validate, AppError, BlockOutputs, PageType, RawProductInput, SynthesisContext,
};
use serde_json::json;

fn glowboost_raw() -> RawProductInput {
    serde_json::from_value(json!({
        "name": "GlowBoost Vitamin C Serum",
        "description": "A brightening vitamin C serum for daily use.",
        "ingredients": "Vitamin C, Hyaluronic Acid",
        "benefits": "Brightens skin tone, Reduces fine lines, Deeply hydrates",
        "skinTypes": "oily, combination",
        "usageInstructions": "Apply 3-4 drops every morning.",
        "price": 29.99,
        "sizeOptions": "15ml, 30ml",
        "safetyNotes": "Patch test before first use.",
        "concentration": 15
    }))
    .expect("fixture deserializes")
}

fn context() -> SynthesisContext {
    let product = normalize(&glowboost_raw()).unwrap();
    let questions = generate_questions(&product).unwrap();
    SynthesisContext { product, questions }
}

#[test]
fn ten_questions_fail_validation_naming_min_questions() {
    let full = context();
    let questions: Vec<_> = full.questions.iter().take(10).cloned().collect();

    let outputs = BlockOutputs {
        product_name: Some(full.product.name.clone()),
        questions: Some(questions.clone()),
        faq_items: Some(build_faq_items_block(&full.product, &questions)),
        ..Default::default()
    };

    // Assembly succeeds — the shortfall is a rule violation, not a missing
    // field — and validation reports it by name. No FAQ page is emitted.
    let document = assemble(PageType::Faq, &outputs).unwrap();
    let violations = validate(&document, definition_for(PageType::Faq)).unwrap_err();
    assert!(violations.contains(&"min_questions"));
}

#[test]
fn a_failing_page_does_not_block_the_other_page_types() {
    let full = context();
    let truncated = SynthesisContext {
        product: full.product.clone(),
        questions: full.questions.into_iter().take(10).collect(),
    };

    assert!(matches!(
        compose_page(PageType::Faq, &truncated),
        Err(AppError::TemplateValidation {
            page_type: PageType::Faq,
            ..
        })
    ));
    assert!(compose_page(PageType::Product, &truncated).is_ok());
    assert!(compose_page(PageType::Comparison, &truncated).is_ok());
}

#[test]
fn missing_hero_block_fails_product_assembly() {
    let full = context();
    let outputs = BlockOutputs {
        details: Some(product2pages::build_product_details_block(&full.product)),
        purchase: Some(product2pages::build_purchase_info_block(&full.product)),
        ..Default::default()
    };

    match assemble(PageType::Product, &outputs) {
        Err(AppError::MissingBlock { page_type, block }) => {
            assert_eq!(page_type, PageType::Product);
            assert_eq!(block, "hero");
        }
        other => panic!("expected MissingBlock, got {:?}", other),
    }
}

#[test]
fn empty_outputs_fail_comparison_assembly() {
    let outputs = BlockOutputs::default();

    assert!(matches!(
        assemble(PageType::Comparison, &outputs),
        Err(AppError::MissingBlock {
            page_type: PageType::Comparison,
            ..
        })
    ));
}

#[test]
fn definitions_declare_their_rules_as_data() {
    let faq = definition_for(PageType::Faq);
    let rule_names: Vec<&str> = faq.rules.iter().map(|r| r.name).collect();
    assert_eq!(rule_names, vec!["min_questions", "category_coverage"]);

    assert!(faq.required_blocks.contains("faq_items"));
    assert!(definition_for(PageType::Comparison)
        .required_fields
        .contains("rows"));
}
