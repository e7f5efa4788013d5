// src/model/mod.rs
//! Core domain model: the raw input boundary, the normalized product record,
//! derived questions, and the final page documents.

mod pages;
mod product;
mod question;
mod raw;

pub use pages::{ComparisonPage, FaqPage, FaqSection, PageDocument, ProductPage};
pub use product::Product;
pub use question::UserQuestion;
pub use raw::RawProductInput;
