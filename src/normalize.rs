// src/normalize.rs
//! The normalizer: loose external record in, strict `Product` out.
//!
//! Pure and fallible. Trims every string field, splits delimiter-joined
//! list fields into ordered de-duplicated items, and coerces numeric-looking
//! price fields. Any missing or malformed required field fails with a
//! `ValidationError` naming that field — no partial `Product` is ever
//! returned.

use crate::model::{Product, RawProductInput};
use crate::types::{Price, ValidationError};
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Delimiters accepted in list-as-string fields.
static LIST_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;|]").expect("list delimiter pattern is valid"));

/// Normalizes a raw product record into a strict `Product`.
///
/// Idempotent: serializing the resulting `Product` back into a
/// `RawProductInput` and normalizing again yields an equal `Product`.
pub fn normalize(raw: &RawProductInput) -> Result<Product, ValidationError> {
    let price = Price::new(required_number("price", &raw.price)?)?;

    Ok(Product {
        name: required_string("name", &raw.name)?,
        description: required_string("description", &raw.description)?,
        ingredients: required_list("ingredients", &raw.ingredients)?,
        benefits: required_list("benefits", &raw.benefits)?,
        skin_types: required_list("skin_types", &raw.skin_types)?,
        usage_instructions: required_string("usage_instructions", &raw.usage_instructions)?,
        price,
        size_options: required_list("size_options", &raw.size_options)?,
        safety_notes: required_string("safety_notes", &raw.safety_notes)?,
        concentration: optional_number("concentration", &raw.concentration)?,
    })
}

// --- Field helpers ---

/// A required string field: present, trimmed, non-empty.
fn required_string(
    field: &'static str,
    value: &Option<String>,
) -> Result<String, ValidationError> {
    let value = value.as_ref().ok_or(ValidationError::MissingField(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// A required list field: a JSON array of strings or a delimiter-joined
/// string, reduced to trimmed, non-empty, de-duplicated items in source order.
fn required_list(
    field: &'static str,
    value: &Option<Value>,
) -> Result<Vec<String>, ValidationError> {
    let value = value.as_ref().ok_or(ValidationError::MissingField(field))?;

    let parts: Vec<String> = match value {
        Value::String(joined) => LIST_DELIMITERS
            .split(joined)
            .map(str::to_string)
            .collect(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(ValidationError::InvalidType {
                    field,
                    expected: "list of strings",
                }),
            })
            .collect::<Result<_, _>>()?,
        _ => {
            return Err(ValidationError::InvalidType {
                field,
                expected: "list of strings or delimited string",
            })
        }
    };

    let cleaned: IndexSet<String> = parts
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(cleaned.into_iter().collect())
}

/// A required numeric field: a JSON number or a numeric-looking string.
fn required_number(field: &'static str, value: &Option<Value>) -> Result<f64, ValidationError> {
    let value = value.as_ref().ok_or(ValidationError::MissingField(field))?;
    coerce_number(field, value)
}

/// An optional numeric field: absent stays absent, present must coerce.
fn optional_number(
    field: &'static str,
    value: &Option<Value>,
) -> Result<Option<f64>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_number(field, value).map(Some),
    }
}

fn coerce_number(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    match value {
        Value::Number(number) => number.as_f64().ok_or(ValidationError::InvalidNumber {
            field,
            value: number.to_string(),
        }),
        Value::String(text) => {
            // Tolerate the currency/percent markers raw feeds tend to carry.
            let cleaned = text
                .trim()
                .trim_start_matches('$')
                .trim_end_matches('%')
                .trim();
            cleaned
                .parse::<f64>()
                .map_err(|_| ValidationError::InvalidNumber {
                    field,
                    value: text.clone(),
                })
        }
        _ => Err(ValidationError::InvalidType {
            field,
            expected: "number or numeric string",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_raw() -> RawProductInput {
        serde_json::from_value(json!({
            "name": "  GlowBoost Vitamin C Serum  ",
            "description": "A brightening vitamin C serum for daily use.",
            "ingredients": "Vitamin C, Hyaluronic Acid, Vitamin C,  Vitamin E ",
            "benefits": ["Brightens skin tone", " Reduces fine lines ", ""],
            "skinTypes": "oily; combination",
            "usageInstructions": "Apply 3-4 drops every morning.",
            "price": "29.99",
            "sizeOptions": "15ml | 30ml",
            "safetyNotes": "Patch test before first use.",
            "concentration": "15%"
        }))
        .unwrap()
    }

    #[test]
    fn normalizes_a_full_record() {
        let product = normalize(&sample_raw()).unwrap();

        assert_eq!(product.name, "GlowBoost Vitamin C Serum");
        assert_eq!(
            product.ingredients,
            vec!["Vitamin C", "Hyaluronic Acid", "Vitamin E"]
        );
        assert_eq!(
            product.benefits,
            vec!["Brightens skin tone", "Reduces fine lines"]
        );
        assert_eq!(product.skin_types, vec!["oily", "combination"]);
        assert_eq!(product.size_options, vec!["15ml", "30ml"]);
        assert_eq!(product.price.value(), 29.99);
        assert_eq!(product.concentration, Some(15.0));
    }

    #[test]
    fn missing_price_names_the_field() {
        let mut raw = sample_raw();
        raw.price = None;

        assert_eq!(
            normalize(&raw).unwrap_err(),
            ValidationError::MissingField("price")
        );
    }

    #[test]
    fn malformed_price_names_the_field() {
        let mut raw = sample_raw();
        raw.price = Some(json!("twenty-nine"));

        assert!(matches!(
            normalize(&raw).unwrap_err(),
            ValidationError::InvalidNumber { field: "price", .. }
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut raw = sample_raw();
        raw.price = Some(json!(-1.0));

        assert!(matches!(
            normalize(&raw).unwrap_err(),
            ValidationError::OutOfRange { field: "price", .. }
        ));
    }

    #[test]
    fn whitespace_only_field_is_empty() {
        let mut raw = sample_raw();
        raw.safety_notes = Some("   ".to_string());

        assert_eq!(
            normalize(&raw).unwrap_err(),
            ValidationError::EmptyField("safety_notes")
        );
    }

    #[test]
    fn list_of_non_strings_is_rejected() {
        let mut raw = sample_raw();
        raw.ingredients = Some(json!([1, 2, 3]));

        assert!(matches!(
            normalize(&raw).unwrap_err(),
            ValidationError::InvalidType {
                field: "ingredients",
                ..
            }
        ));
    }

    #[test]
    fn missing_concentration_stays_absent() {
        let mut raw = sample_raw();
        raw.concentration = None;

        let product = normalize(&raw).unwrap();
        assert_eq!(product.concentration, None);
    }

    #[test]
    fn normalize_is_idempotent() {
        let first = normalize(&sample_raw()).unwrap();

        // Re-feed the normalized product through a trivial re-serialization.
        let reserialized: RawProductInput =
            serde_json::from_value(serde_json::to_value(&first).unwrap()).unwrap();
        let second = normalize(&reserialized).unwrap();

        assert_eq!(first, second);
    }
}
