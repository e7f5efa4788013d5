// src/blocks/details.rs
//! Detail and purchase fact blocks for the product page body.

use crate::model::Product;
use crate::types::Price;
use serde::Serialize;

/// The descriptive facts of a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    pub description: String,
    pub ingredients: Vec<String>,
    pub skin_types: Vec<String>,
    pub usage_instructions: String,
    pub safety_notes: String,
    pub concentration: Option<f64>,
}

/// The purchase-relevant facts of a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseInfo {
    pub price: Price,
    pub size_options: Vec<String>,
}

/// Projects the descriptive fields of a product.
pub fn build_product_details_block(product: &Product) -> ProductDetails {
    ProductDetails {
        description: product.description.clone(),
        ingredients: product.ingredients.clone(),
        skin_types: product.skin_types.clone(),
        usage_instructions: product.usage_instructions.clone(),
        safety_notes: product.safety_notes.clone(),
        concentration: product.concentration,
    }
}

/// Projects the purchase fields of a product.
pub fn build_purchase_info_block(product: &Product) -> PurchaseInfo {
    PurchaseInfo {
        price: product.price,
        size_options: product.size_options.clone(),
    }
}
