// src/lib.rs
//! product2pages library — turns one structured product record into three
//! machine-readable content documents (FAQ, product, comparison).
//!
//! The pipeline is deterministic and side-effect free: no network, no model
//! inference, no randomness, no clock. All variability comes from the input
//! record.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `PipelineConfig`
//! - **Domain model** — `RawProductInput`, `Product`, `UserQuestion`, page documents
//! - **Normalization** — `normalize`
//! - **Question generation** — `generate_questions`
//! - **Content blocks** — `summarize_product_for_hero`, `build_faq_items_block`, …
//! - **Template engine** — `assemble`, `validate`, `definition_for`
//! - **Pipeline** — `synthesize`, `compose_page`, the stage capability traits

mod blocks;
mod config;
mod constants;
mod error;
mod model;
mod normalize;
mod output;
mod pipeline;
mod questions;
mod template;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig};

// --- Domain Model ---
pub use crate::model::{
    ComparisonPage, FaqPage, FaqSection, PageDocument, Product, ProductPage, RawProductInput,
    UserQuestion,
};

// --- Domain Types ---
pub use crate::types::{PageType, Price, QuestionCategory};

// --- Normalization ---
pub use crate::normalize::normalize;

// --- Question Generation ---
pub use crate::questions::generate_questions;

// --- Content Blocks ---
pub use crate::blocks::{
    build_comparison_points_block, build_comparison_summaries_block, build_faq_items_block,
    build_product_details_block, build_purchase_info_block, comparison_counterpart,
    summarize_product_for_hero, ComparisonRow, ComparisonSummaries, ComparisonSummary, FaqItem,
    HeroSummary, ProductDetails, PurchaseInfo, Winner,
};

// --- Template Engine ---
pub use crate::template::{
    assemble, definition_for, validate, BlockOutputs, TemplateDefinition, TemplateRule,
};

// --- Pipeline ---
pub use crate::pipeline::{
    compose_page, synthesize, DocumentDelivery, PageOutcome, PageSynthesizer, RecordSource,
    SynthesisContext, SynthesisRun,
};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};

// --- Constants ---
pub use crate::constants::{HERO_KEY_BENEFITS_CAP, MIN_TOTAL_QUESTIONS};
