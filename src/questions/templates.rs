// src/questions/templates.rs
//! The declarative question template table.
//!
//! Templates are static configuration data: a category, an interpolation
//! pattern, and the product field the pattern depends on. Declaration order
//! within a category is the emission order. The table is tuned so a fully
//! populated product yields 31 questions while every category stays above
//! its contract minimum even when optional fields are absent.

use crate::model::Product;
use crate::types::QuestionCategory;

/// The product field a template interpolates or summarizes.
///
/// A template is skipped when its field is empty on the product, so each
/// template names exactly one field it cannot render without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SourceField {
    Name,
    Description,
    Ingredients,
    Benefits,
    SkinTypes,
    UsageInstructions,
    Price,
    SizeOptions,
    SafetyNotes,
    Concentration,
}

impl SourceField {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Ingredients => "ingredients",
            Self::Benefits => "benefits",
            Self::SkinTypes => "skin_types",
            Self::UsageInstructions => "usage_instructions",
            Self::Price => "price",
            Self::SizeOptions => "size_options",
            Self::SafetyNotes => "safety_notes",
            Self::Concentration => "concentration",
        }
    }

    /// Whether the field carries a usable value on this product.
    fn is_present(&self, product: &Product) -> bool {
        match self {
            Self::Name => !product.name.is_empty(),
            Self::Description => !product.description.is_empty(),
            Self::Ingredients => !product.ingredients.is_empty(),
            Self::Benefits => !product.benefits.is_empty(),
            Self::SkinTypes => !product.skin_types.is_empty(),
            Self::UsageInstructions => !product.usage_instructions.is_empty(),
            Self::Price => true,
            Self::SizeOptions => !product.size_options.is_empty(),
            Self::SafetyNotes => !product.safety_notes.is_empty(),
            Self::Concentration => product.concentration.is_some(),
        }
    }
}

/// One question template: pattern plus the field it requires.
///
/// Patterns interpolate `{name}` (always available), `{ingredient}` (the
/// first ingredient), and `{skin_type}` (the first skin type).
#[derive(Debug)]
pub(crate) struct QuestionTemplate {
    pub category: QuestionCategory,
    pub pattern: &'static str,
    pub requires: SourceField,
}

impl QuestionTemplate {
    /// Renders the template against a product, or `None` when the required
    /// field is empty.
    pub(crate) fn render(&self, product: &Product) -> Option<String> {
        if !self.requires.is_present(product) {
            return None;
        }

        let mut text = self.pattern.replace("{name}", &product.name);
        if text.contains("{ingredient}") {
            text = text.replace("{ingredient}", product.ingredients.first()?);
        }
        if text.contains("{skin_type}") {
            text = text.replace("{skin_type}", product.skin_types.first()?);
        }
        Some(text)
    }
}

const fn template(
    category: QuestionCategory,
    pattern: &'static str,
    requires: SourceField,
) -> QuestionTemplate {
    QuestionTemplate {
        category,
        pattern,
        requires,
    }
}

/// The default template table, grouped by category in the emission order.
pub(crate) const QUESTION_TEMPLATES: &[QuestionTemplate] = &[
    // informational (8)
    template(
        QuestionCategory::Informational,
        "What is {name}?",
        SourceField::Name,
    ),
    template(
        QuestionCategory::Informational,
        "What are the key ingredients in {name}?",
        SourceField::Ingredients,
    ),
    template(
        QuestionCategory::Informational,
        "What does {name} do for my skin?",
        SourceField::Benefits,
    ),
    template(
        QuestionCategory::Informational,
        "Which skin types is {name} suitable for?",
        SourceField::SkinTypes,
    ),
    template(
        QuestionCategory::Informational,
        "What makes {name} different from similar products?",
        SourceField::Description,
    ),
    template(
        QuestionCategory::Informational,
        "Does {name} contain {ingredient}?",
        SourceField::Ingredients,
    ),
    template(
        QuestionCategory::Informational,
        "What is the active concentration in {name}?",
        SourceField::Concentration,
    ),
    template(
        QuestionCategory::Informational,
        "What benefits can I expect from using {name}?",
        SourceField::Benefits,
    ),
    // usage (7)
    template(
        QuestionCategory::Usage,
        "How do I use {name}?",
        SourceField::UsageInstructions,
    ),
    template(
        QuestionCategory::Usage,
        "How often should I apply {name}?",
        SourceField::UsageInstructions,
    ),
    template(
        QuestionCategory::Usage,
        "When should I use {name}, morning or night?",
        SourceField::UsageInstructions,
    ),
    template(
        QuestionCategory::Usage,
        "Can I use {name} alongside my existing routine?",
        SourceField::Name,
    ),
    template(
        QuestionCategory::Usage,
        "How much {name} should I apply each time?",
        SourceField::UsageInstructions,
    ),
    template(
        QuestionCategory::Usage,
        "Can I apply {name} under makeup?",
        SourceField::Name,
    ),
    template(
        QuestionCategory::Usage,
        "How long does one bottle of {name} last?",
        SourceField::SizeOptions,
    ),
    // safety (6)
    template(
        QuestionCategory::Safety,
        "Is {name} safe for sensitive skin?",
        SourceField::SafetyNotes,
    ),
    template(
        QuestionCategory::Safety,
        "Are there any side effects of using {name}?",
        SourceField::SafetyNotes,
    ),
    template(
        QuestionCategory::Safety,
        "Should I patch test {name} before first use?",
        SourceField::SafetyNotes,
    ),
    template(
        QuestionCategory::Safety,
        "Can I use {name} during pregnancy?",
        SourceField::SafetyNotes,
    ),
    template(
        QuestionCategory::Safety,
        "Is {name} safe to use around the eyes?",
        SourceField::SafetyNotes,
    ),
    template(
        QuestionCategory::Safety,
        "What should I do if {name} irritates my skin?",
        SourceField::SafetyNotes,
    ),
    // purchase (6)
    template(
        QuestionCategory::Purchase,
        "How much does {name} cost?",
        SourceField::Price,
    ),
    template(
        QuestionCategory::Purchase,
        "What sizes does {name} come in?",
        SourceField::SizeOptions,
    ),
    template(
        QuestionCategory::Purchase,
        "Which size of {name} should I start with?",
        SourceField::SizeOptions,
    ),
    template(
        QuestionCategory::Purchase,
        "Is {name} worth the price?",
        SourceField::Price,
    ),
    template(
        QuestionCategory::Purchase,
        "Where can I buy {name}?",
        SourceField::Name,
    ),
    template(
        QuestionCategory::Purchase,
        "Does {name} come in a travel size?",
        SourceField::SizeOptions,
    ),
    // comparison (4)
    template(
        QuestionCategory::Comparison,
        "How does {name} compare to similar products?",
        SourceField::Name,
    ),
    template(
        QuestionCategory::Comparison,
        "Is {name} a good choice for {skin_type} skin compared to alternatives?",
        SourceField::SkinTypes,
    ),
    template(
        QuestionCategory::Comparison,
        "What does {name} offer that cheaper alternatives don't?",
        SourceField::Benefits,
    ),
    template(
        QuestionCategory::Comparison,
        "How do the ingredients in {name} compare to other formulas?",
        SourceField::Ingredients,
    ),
];

/// Templates for one category, in declaration order.
pub(crate) fn templates_for(
    category: QuestionCategory,
) -> impl Iterator<Item = &'static QuestionTemplate> {
    QUESTION_TEMPLATES
        .iter()
        .filter(move |t| t.category == category)
}
