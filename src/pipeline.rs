// src/pipeline.rs
//! The synthesis pipeline: normalize once, generate questions once, then
//! compose and validate each page type independently.
//!
//! Capability traits abstract the three stages of the record-to-pages
//! pipeline so each can be tested in isolation. Page composition is pure;
//! the three page types never observe each other's output, so they are
//! evaluated in parallel as an optimization only.

use crate::blocks::{
    build_comparison_points_block, build_comparison_summaries_block, build_faq_items_block,
    build_product_details_block, build_purchase_info_block, comparison_counterpart,
    summarize_product_for_hero,
};
use crate::error::AppError;
use crate::model::{PageDocument, Product, RawProductInput, UserQuestion};
use crate::normalize::normalize;
use crate::output::OutputReport;
use crate::questions::generate_questions;
use crate::template::{assemble, definition_for, validate, BlockOutputs};
use crate::types::PageType;
use rayon::prelude::*;

/// Loads a raw product record.
pub trait RecordSource {
    fn load(&self) -> Result<RawProductInput, AppError>;
}

/// Transforms a raw record into per-page outcomes.
pub trait PageSynthesizer {
    fn synthesize(&self, raw: &RawProductInput) -> Result<SynthesisRun, AppError>;
}

/// Delivers the finished documents to their destinations.
pub trait DocumentDelivery {
    fn deliver(&self, run: &SynthesisRun) -> Result<OutputReport, AppError>;
}

/// The immutable inputs shared by every page agent within one run.
#[derive(Debug, Clone)]
pub struct SynthesisContext {
    pub product: Product,
    pub questions: Vec<UserQuestion>,
}

/// The result of composing one page type.
#[derive(Debug)]
pub struct PageOutcome {
    pub page_type: PageType,
    pub result: Result<PageDocument, AppError>,
}

/// All per-page outcomes of one run, in `PageType::ALL` order.
#[derive(Debug)]
pub struct SynthesisRun {
    pub outcomes: Vec<PageOutcome>,
}

impl SynthesisRun {
    /// Successfully synthesized documents, in page-type order.
    pub fn documents(&self) -> impl Iterator<Item = &PageDocument> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
    }

    /// Page types that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (PageType, &AppError)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err().map(|e| (outcome.page_type, e)))
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Runs the full synthesis pipeline over one raw record.
///
/// Normalization and question generation failures abort the run — every page
/// depends on them. Page composition failures are scoped to their page type:
/// the remaining pages still complete and appear in the returned outcomes.
pub fn synthesize(raw: &RawProductInput) -> Result<SynthesisRun, AppError> {
    let product = normalize(raw)?;
    log::info!("Normalized product '{}'", product.name);

    let questions = generate_questions(&product)?;
    let context = SynthesisContext { product, questions };

    let outcomes = PageType::ALL
        .par_iter()
        .map(|&page_type| PageOutcome {
            page_type,
            result: compose_page(page_type, &context),
        })
        .collect();

    Ok(SynthesisRun { outcomes })
}

/// Composes and validates one page type from the shared context.
///
/// The per-page agent: calls the page's blocks in explicit dependency order,
/// assembles their outputs per the template definition, and validates the
/// result. A document that fails validation is never returned.
pub fn compose_page(
    page_type: PageType,
    context: &SynthesisContext,
) -> Result<PageDocument, AppError> {
    let outputs = collect_block_outputs(page_type, context);
    let document = assemble(page_type, &outputs)?;

    validate(&document, definition_for(page_type)).map_err(|violations| {
        AppError::TemplateValidation {
            page_type,
            violations: violations.iter().map(|v| v.to_string()).collect(),
        }
    })?;

    log::info!("Composed and validated the {} page", page_type);
    Ok(document)
}

/// Runs each page type's blocks in its fixed call order.
fn collect_block_outputs(page_type: PageType, context: &SynthesisContext) -> BlockOutputs {
    match page_type {
        PageType::Faq => BlockOutputs {
            product_name: Some(context.product.name.clone()),
            questions: Some(context.questions.clone()),
            faq_items: Some(build_faq_items_block(&context.product, &context.questions)),
            ..Default::default()
        },
        PageType::Product => BlockOutputs {
            hero: Some(summarize_product_for_hero(&context.product)),
            details: Some(build_product_details_block(&context.product)),
            purchase: Some(build_purchase_info_block(&context.product)),
            ..Default::default()
        },
        PageType::Comparison => {
            // The points block depends on the summaries block's output,
            // passed explicitly.
            let summaries =
                build_comparison_summaries_block(&context.product, comparison_counterpart());
            let rows = build_comparison_points_block(&summaries.summary_a, &summaries.summary_b);
            BlockOutputs {
                comparison_summaries: Some(summaries),
                comparison_rows: Some(rows),
                ..Default::default()
            }
        }
    }
}
