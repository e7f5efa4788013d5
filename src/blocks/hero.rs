// src/blocks/hero.rs
//! Hero summary block: the short highlight facts for the product page header.

use crate::constants::{HERO_KEY_BENEFITS_CAP, TAGLINE_MAX_CHARS};
use crate::model::Product;
use serde::Serialize;

/// The hero facts: title, tagline, and a capped benefit list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSummary {
    pub title: String,
    pub tagline: String,
    pub key_benefits: Vec<String>,
}

/// Summarizes a product for the hero section.
///
/// Key benefits are the first `HERO_KEY_BENEFITS_CAP` benefits in source
/// order — never reordered by heuristic scoring, so the hero is reproducible.
pub fn summarize_product_for_hero(product: &Product) -> HeroSummary {
    HeroSummary {
        title: product.name.clone(),
        tagline: lead_sentence(&product.description, TAGLINE_MAX_CHARS),
        key_benefits: product
            .benefits
            .iter()
            .take(HERO_KEY_BENEFITS_CAP)
            .cloned()
            .collect(),
    }
}

/// First sentence of the text, truncated to `max_chars` characters.
fn lead_sentence(text: &str, max_chars: usize) -> String {
    let sentence = text.split_terminator('.').next().unwrap_or(text).trim();
    sentence.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;
    use pretty_assertions::assert_eq;

    fn sample_product() -> Product {
        Product {
            name: "GlowBoost Vitamin C Serum".to_string(),
            description: "A brightening vitamin C serum for daily use. Suits most routines."
                .to_string(),
            ingredients: vec!["Vitamin C".to_string(), "Hyaluronic Acid".to_string()],
            benefits: vec![
                "Brightens skin tone".to_string(),
                "Reduces fine lines".to_string(),
                "Deeply hydrates".to_string(),
                "Protects against free radicals".to_string(),
            ],
            skin_types: vec!["oily".to_string(), "combination".to_string()],
            usage_instructions: "Apply every morning.".to_string(),
            price: Price::new(29.99).unwrap(),
            size_options: vec!["30ml".to_string()],
            safety_notes: "Patch test first.".to_string(),
            concentration: Some(15.0),
        }
    }

    #[test]
    fn title_contains_the_product_name() {
        let hero = summarize_product_for_hero(&sample_product());
        assert!(hero.title.contains("GlowBoost Vitamin C Serum"));
    }

    #[test]
    fn key_benefits_are_capped_in_source_order() {
        let hero = summarize_product_for_hero(&sample_product());

        assert!(hero.key_benefits.len() <= HERO_KEY_BENEFITS_CAP);
        assert_eq!(
            hero.key_benefits,
            vec!["Brightens skin tone", "Reduces fine lines", "Deeply hydrates"]
        );
    }

    #[test]
    fn tagline_is_the_lead_sentence() {
        let hero = summarize_product_for_hero(&sample_product());
        assert_eq!(hero.tagline, "A brightening vitamin C serum for daily use");
    }

    #[test]
    fn tagline_is_bounded() {
        let mut product = sample_product();
        product.description = "x".repeat(500);

        let hero = summarize_product_for_hero(&product);
        assert!(hero.tagline.chars().count() <= TAGLINE_MAX_CHARS);
    }
}
