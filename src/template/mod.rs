// src/template/mod.rs
//! The template engine: declarative page definitions, assembly of block
//! outputs into page documents, and post-assembly rule validation.

mod assemble;
mod definition;
mod validate;

pub use assemble::{assemble, BlockOutputs};
pub use definition::{definition_for, TemplateDefinition, TemplateRule};
pub use validate::validate;
