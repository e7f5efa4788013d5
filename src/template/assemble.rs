// src/template/assemble.rs
//! Assembly: block outputs in, page document out.
//!
//! Assembly is driven by the page's `TemplateDefinition`: every required
//! block and field is checked against the collected outputs before
//! construction. A field with no satisfying block output is a hard error,
//! never silently defaulted.

use super::definition::definition_for;
use crate::blocks::{
    ComparisonRow, ComparisonSummaries, FaqItem, HeroSummary, ProductDetails, PurchaseInfo,
};
use crate::error::AppError;
use crate::model::{
    ComparisonPage, FaqPage, FaqSection, PageDocument, ProductPage, UserQuestion,
};
use crate::types::{PageType, QuestionCategory};

/// The block outputs a page agent collected for one page type.
///
/// Each slot corresponds to one block; dependency resolution is the agent's
/// explicit call order, not a dataflow solver.
#[derive(Debug, Default)]
pub struct BlockOutputs {
    pub product_name: Option<String>,
    pub questions: Option<Vec<UserQuestion>>,
    pub faq_items: Option<Vec<FaqItem>>,
    pub hero: Option<HeroSummary>,
    pub details: Option<ProductDetails>,
    pub purchase: Option<PurchaseInfo>,
    pub comparison_summaries: Option<ComparisonSummaries>,
    pub comparison_rows: Option<Vec<ComparisonRow>>,
}

impl BlockOutputs {
    /// Whether the named block produced an output.
    fn provides_block(&self, block: &str) -> bool {
        match block {
            "faq_items" => self.faq_items.is_some(),
            "hero" => self.hero.is_some(),
            "details" => self.details.is_some(),
            "purchase" => self.purchase.is_some(),
            "comparison_summaries" => self.comparison_summaries.is_some(),
            "comparison_rows" => self.comparison_rows.is_some(),
            _ => false,
        }
    }

    /// Whether some block output satisfies the named document field.
    fn provides_field(&self, field: &str) -> bool {
        match field {
            "product_name" => self.product_name.is_some(),
            "sections" => self.faq_items.is_some(),
            "hero.title" | "hero.key_benefits" => self.hero.is_some(),
            "details.ingredients" => self.details.is_some(),
            "purchase.price" => self.purchase.is_some(),
            "product_a" | "product_b" => self.comparison_summaries.is_some(),
            "rows" => self.comparison_rows.is_some(),
            _ => false,
        }
    }
}

/// Assembles the collected block outputs into a page document.
pub fn assemble(page_type: PageType, outputs: &BlockOutputs) -> Result<PageDocument, AppError> {
    let definition = definition_for(page_type);

    for block in &definition.required_blocks {
        if !outputs.provides_block(block) {
            return Err(AppError::MissingBlock { page_type, block });
        }
    }
    for field in &definition.required_fields {
        if !outputs.provides_field(field) {
            return Err(AppError::MissingField { page_type, field });
        }
    }

    match page_type {
        PageType::Faq => build_faq_page(outputs),
        PageType::Product => build_product_page(outputs),
        PageType::Comparison => build_comparison_page(outputs),
    }
}

// --- Page constructors ---

fn build_faq_page(outputs: &BlockOutputs) -> Result<PageDocument, AppError> {
    let product_name = required(PageType::Faq, "product_name", &outputs.product_name)?.clone();
    let items = required(PageType::Faq, "sections", &outputs.faq_items)?;

    // Sections are created for every category present in the question set
    // when one was supplied, so a category whose items were all dropped
    // still surfaces (empty) for the coverage rule to catch. Otherwise the
    // categories are taken from the items themselves.
    let categories: Vec<QuestionCategory> = QuestionCategory::ALL
        .into_iter()
        .filter(|&category| match &outputs.questions {
            Some(questions) => questions.iter().any(|q| q.category == category),
            None => items.iter().any(|i| i.category == category),
        })
        .collect();

    let sections = categories
        .into_iter()
        .map(|category| FaqSection {
            category,
            items: items
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect(),
        })
        .collect();

    Ok(PageDocument::Faq(FaqPage {
        product_name,
        sections,
    }))
}

fn build_product_page(outputs: &BlockOutputs) -> Result<PageDocument, AppError> {
    Ok(PageDocument::Product(ProductPage {
        hero: required(PageType::Product, "hero.title", &outputs.hero)?.clone(),
        details: required(PageType::Product, "details.ingredients", &outputs.details)?.clone(),
        purchase: required(PageType::Product, "purchase.price", &outputs.purchase)?.clone(),
    }))
}

fn build_comparison_page(outputs: &BlockOutputs) -> Result<PageDocument, AppError> {
    let summaries = required(
        PageType::Comparison,
        "product_a",
        &outputs.comparison_summaries,
    )?;
    let rows = required(PageType::Comparison, "rows", &outputs.comparison_rows)?.clone();

    Ok(PageDocument::Comparison(ComparisonPage {
        product_a: summaries.summary_a.clone(),
        product_b: summaries.summary_b.clone(),
        rows,
    }))
}

fn required<'a, T>(
    page_type: PageType,
    field: &'static str,
    value: &'a Option<T>,
) -> Result<&'a T, AppError> {
    value
        .as_ref()
        .ok_or(AppError::MissingField { page_type, field })
}
