// src/model/question.rs

use crate::types::QuestionCategory;
use serde::{Deserialize, Serialize};

/// A derived user question, produced once per run by the question generator.
///
/// The sequence of questions for a given product is stable: grouped by
/// category in the fixed category order, templates within a category in
/// declaration order, no duplicate text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuestion {
    pub text: String,
    pub category: QuestionCategory,
}
