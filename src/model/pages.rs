// src/model/pages.rs
//! The terminal artifacts of a run: one serializable document per page type.
//!
//! Every leaf is a typed, addressable field — no free-form prose blobs.
//! Documents are created by the template engine and never mutated afterwards.

use crate::blocks::{
    ComparisonRow, ComparisonSummary, FaqItem, HeroSummary, ProductDetails, PurchaseInfo,
};
use crate::types::{PageType, QuestionCategory};
use serde::Serialize;

/// One category's worth of FAQ items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqSection {
    pub category: QuestionCategory,
    pub items: Vec<FaqItem>,
}

/// The FAQ page: items grouped by category in the fixed category order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqPage {
    pub product_name: String,
    pub sections: Vec<FaqSection>,
}

impl FaqPage {
    /// Total number of FAQ items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// The product page: hero summary plus detail and purchase facts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    pub hero: HeroSummary,
    pub details: ProductDetails,
    pub purchase: PurchaseInfo,
}

/// The comparison page: both product summaries and the row set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPage {
    pub product_a: ComparisonSummary,
    pub product_b: ComparisonSummary,
    pub rows: Vec<ComparisonRow>,
}

/// A finished page document of any type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page_type", rename_all = "snake_case")]
pub enum PageDocument {
    Faq(FaqPage),
    Product(ProductPage),
    Comparison(ComparisonPage),
}

impl PageDocument {
    pub fn page_type(&self) -> PageType {
        match self {
            Self::Faq(_) => PageType::Faq,
            Self::Product(_) => PageType::Product,
            Self::Comparison(_) => PageType::Comparison,
        }
    }
}
