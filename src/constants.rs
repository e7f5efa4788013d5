// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. The question minimums are contract values enforced as
//! post-conditions by the question generator; the default template table is
//! tuned above them.

// ---------------------------------------------------------------------------
// Question coverage contract
// ---------------------------------------------------------------------------

/// Minimum total number of questions a run must produce.
///
/// This is the enforced contract. The default template table is tuned to
/// `DEFAULT_QUESTION_TARGET`, well above this floor, so the minimum only
/// bites when templates are skipped for sparse products.
pub const MIN_TOTAL_QUESTIONS: usize = 15;

/// Number of questions the default template table produces for a fully
/// populated product. A tuning target, not an enforced invariant.
#[allow(dead_code)]
pub const DEFAULT_QUESTION_TARGET: usize = 31;

/// Minimum questions in the `informational` category.
pub const MIN_INFORMATIONAL_QUESTIONS: usize = 6;

/// Minimum questions in the `usage` category.
pub const MIN_USAGE_QUESTIONS: usize = 5;

/// Minimum questions in the `safety` category.
pub const MIN_SAFETY_QUESTIONS: usize = 4;

/// Minimum questions in the `purchase` category.
pub const MIN_PURCHASE_QUESTIONS: usize = 4;

/// Minimum questions in the `comparison` category.
pub const MIN_COMPARISON_QUESTIONS: usize = 2;

// ---------------------------------------------------------------------------
// Hero summary boundaries
// ---------------------------------------------------------------------------

/// Maximum number of benefits surfaced in the hero summary.
///
/// Benefits are taken in source order and capped here — never reordered by
/// heuristic scoring, so hero output is reproducible byte-for-byte.
pub const HERO_KEY_BENEFITS_CAP: usize = 3;

/// Maximum characters in the hero tagline.
///
/// The tagline is the lead sentence of the description; this bound keeps it
/// a tagline rather than a paragraph when the description has long sentences.
pub const TAGLINE_MAX_CHARS: usize = 120;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Default directory for the emitted page documents.
pub const DEFAULT_OUTPUT_DIR: &str = "./content";
