// src/blocks/comparison.rs
//! Comparison blocks: field-by-field rows between the input product and the
//! fixed synthetic counterpart.
//!
//! Rows are emitted in a fixed attribute order. Where a simple ordering rule
//! applies (lower price, higher concentration, more benefits, more sizes) the
//! row carries a winner tag; ties and non-orderable values carry none. The
//! row set is symmetric: swapping the operands swaps values and flips
//! winners.

use crate::model::Product;
use crate::types::Price;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Which side of a comparison row wins its ordering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    ProductA,
    ProductB,
}

impl Winner {
    /// The same outcome seen from the swapped operand order.
    pub fn flipped(self) -> Self {
        match self {
            Self::ProductA => Self::ProductB,
            Self::ProductB => Self::ProductA,
        }
    }
}

/// The compared facts of one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub name: String,
    pub price: Price,
    pub concentration: Option<f64>,
    pub benefit_count: usize,
    pub size_option_count: usize,
}

/// Both sides of the comparison, summarized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummaries {
    pub summary_a: ComparisonSummary,
    pub summary_b: ComparisonSummary,
}

/// One attribute compared across both products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub attribute: String,
    pub value_a: String,
    pub value_b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
}

/// The fixed comparison counterpart ("Product B").
///
/// A literal constant, not derived from any external input; owned by the
/// comparison stage only.
static COMPARISON_COUNTERPART: Lazy<Product> = Lazy::new(|| Product {
    name: "ClearWave Niacinamide Serum".to_string(),
    description: "A balancing niacinamide serum that refines texture and visibly tightens pores."
        .to_string(),
    ingredients: vec![
        "Niacinamide".to_string(),
        "Zinc PCA".to_string(),
        "Glycerin".to_string(),
    ],
    benefits: vec![
        "Reduces the look of pores".to_string(),
        "Balances oil production".to_string(),
        "Evens skin tone".to_string(),
    ],
    skin_types: vec!["oily".to_string(), "acne-prone".to_string()],
    usage_instructions: "Apply a pea-sized amount morning and evening after cleansing."
        .to_string(),
    price: Price::new(24.50).expect("counterpart price is valid"),
    size_options: vec!["30ml".to_string()],
    safety_notes: "May cause mild flushing during the first week of use.".to_string(),
    concentration: Some(10.0),
});

/// The fixed comparison counterpart product.
pub fn comparison_counterpart() -> &'static Product {
    &COMPARISON_COUNTERPART
}

/// Summarizes both products down to their compared fields.
pub fn build_comparison_summaries_block(
    product_a: &Product,
    product_b: &Product,
) -> ComparisonSummaries {
    ComparisonSummaries {
        summary_a: summarize(product_a),
        summary_b: summarize(product_b),
    }
}

fn summarize(product: &Product) -> ComparisonSummary {
    ComparisonSummary {
        name: product.name.clone(),
        price: product.price,
        concentration: product.concentration,
        benefit_count: product.benefits.len(),
        size_option_count: product.size_options.len(),
    }
}

/// Builds the comparison rows in the fixed declared attribute order.
pub fn build_comparison_points_block(
    summary_a: &ComparisonSummary,
    summary_b: &ComparisonSummary,
) -> Vec<ComparisonRow> {
    vec![
        price_row(summary_a, summary_b),
        concentration_row(summary_a, summary_b),
        benefit_count_row(summary_a, summary_b),
        size_options_row(summary_a, summary_b),
    ]
}

// --- Rows ---

fn price_row(a: &ComparisonSummary, b: &ComparisonSummary) -> ComparisonRow {
    ComparisonRow {
        attribute: "price".to_string(),
        value_a: a.price.to_string(),
        value_b: b.price.to_string(),
        // Lower price wins.
        winner: winner_by(a.price.value(), b.price.value(), false),
    }
}

fn concentration_row(a: &ComparisonSummary, b: &ComparisonSummary) -> ComparisonRow {
    // The ordering rule only applies when both sides declare a concentration.
    let winner = match (a.concentration, b.concentration) {
        (Some(left), Some(right)) => winner_by(left, right, true),
        _ => None,
    };

    ComparisonRow {
        attribute: "concentration".to_string(),
        value_a: concentration_value(a.concentration),
        value_b: concentration_value(b.concentration),
        winner,
    }
}

fn benefit_count_row(a: &ComparisonSummary, b: &ComparisonSummary) -> ComparisonRow {
    ComparisonRow {
        attribute: "benefit_count".to_string(),
        value_a: a.benefit_count.to_string(),
        value_b: b.benefit_count.to_string(),
        winner: winner_by(a.benefit_count, b.benefit_count, true),
    }
}

fn size_options_row(a: &ComparisonSummary, b: &ComparisonSummary) -> ComparisonRow {
    ComparisonRow {
        attribute: "size_options".to_string(),
        value_a: a.size_option_count.to_string(),
        value_b: b.size_option_count.to_string(),
        winner: winner_by(a.size_option_count, b.size_option_count, true),
    }
}

/// Applies an ordering rule; equal values produce no winner, keeping the row
/// set symmetric under operand swap.
fn winner_by<T: PartialOrd>(a: T, b: T, higher_wins: bool) -> Option<Winner> {
    if a == b {
        None
    } else if (a > b) == higher_wins {
        Some(Winner::ProductA)
    } else {
        Some(Winner::ProductB)
    }
}

fn concentration_value(concentration: Option<f64>) -> String {
    match concentration {
        Some(value) => format!("{}%", value),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_product() -> Product {
        Product {
            name: "GlowBoost Vitamin C Serum".to_string(),
            description: "A brightening vitamin C serum.".to_string(),
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
            size_options: vec!["15ml".to_string(), "30ml".to_string()],
            safety_notes: "Patch test first.".to_string(),
            concentration: Some(15.0),
        }
    }

    #[test]
    fn rows_are_emitted_in_fixed_attribute_order() {
        let summaries =
            build_comparison_summaries_block(&sample_product(), comparison_counterpart());
        let rows = build_comparison_points_block(&summaries.summary_a, &summaries.summary_b);

        let attributes: Vec<&str> = rows.iter().map(|r| r.attribute.as_str()).collect();
        assert_eq!(
            attributes,
            vec!["price", "concentration", "benefit_count", "size_options"]
        );
    }

    #[test]
    fn ordering_rules_pick_the_expected_winners() {
        let summaries =
            build_comparison_summaries_block(&sample_product(), comparison_counterpart());
        let rows = build_comparison_points_block(&summaries.summary_a, &summaries.summary_b);

        // Counterpart is cheaper; input has the higher concentration and more
        // benefits and sizes.
        assert_eq!(rows[0].winner, Some(Winner::ProductB));
        assert_eq!(rows[1].winner, Some(Winner::ProductA));
        assert_eq!(rows[2].winner, Some(Winner::ProductA));
        assert_eq!(rows[3].winner, Some(Winner::ProductA));
    }

    #[test]
    fn swapping_operands_swaps_values_and_flips_winners() {
        let product = sample_product();
        let counterpart = comparison_counterpart();

        let forward = build_comparison_summaries_block(&product, counterpart);
        let reversed = build_comparison_summaries_block(counterpart, &product);

        let forward_rows =
            build_comparison_points_block(&forward.summary_a, &forward.summary_b);
        let reversed_rows =
            build_comparison_points_block(&reversed.summary_a, &reversed.summary_b);

        for (row, swapped) in forward_rows.iter().zip(&reversed_rows) {
            assert_eq!(row.attribute, swapped.attribute);
            assert_eq!(row.value_a, swapped.value_b);
            assert_eq!(row.value_b, swapped.value_a);
            assert_eq!(row.winner, swapped.winner.map(Winner::flipped));
        }
    }

    #[test]
    fn equal_values_have_no_winner() {
        let summary = summarize(&sample_product());
        let rows = build_comparison_points_block(&summary, &summary.clone());

        for row in rows {
            assert_eq!(row.winner, None, "{}", row.attribute);
        }
    }

    #[test]
    fn missing_concentration_omits_the_winner_but_keeps_the_row() {
        let mut product = sample_product();
        product.concentration = None;

        let summaries = build_comparison_summaries_block(&product, comparison_counterpart());
        let rows = build_comparison_points_block(&summaries.summary_a, &summaries.summary_b);

        let row = &rows[1];
        assert_eq!(row.attribute, "concentration");
        assert_eq!(row.value_a, "—");
        assert_eq!(row.winner, None);
    }
}
