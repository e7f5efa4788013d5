// src/blocks/mod.rs
//! The content block library: pure functions from typed inputs to small
//! typed fact structures.
//!
//! Blocks never perform I/O, never read global state, and never mutate their
//! inputs. A block depends on another block only through explicit parameters;
//! page agents call blocks in the order their outputs demand.

mod comparison;
mod details;
mod faq;
mod hero;

pub use comparison::{
    build_comparison_points_block, build_comparison_summaries_block, comparison_counterpart,
    ComparisonRow, ComparisonSummaries, ComparisonSummary, Winner,
};
pub use details::{
    build_product_details_block, build_purchase_info_block, ProductDetails, PurchaseInfo,
};
pub use faq::{build_faq_items_block, FaqItem};
pub use hero::{summarize_product_for_hero, HeroSummary};
