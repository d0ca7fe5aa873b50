//! # Ingredient Parser
//!
//! This module turns a single free-form line ("1 1/2 cups flour", "⅔ tsp salt")
//! into a structured [`Ingredient`]. It never fails: tokens that are not a
//! quantity or a unit simply become part of the item text.
//!
//! ## Algorithm
//!
//! - Split the line on whitespace. A single word is returned as the item.
//! - Consume quantity tokens from the left. Whole numbers may chain with one
//!   following fraction or decimal ("1 3/4"); two whole numbers in a row do not.
//! - Consume one unit token if present.
//! - Join whatever is left as the item.
//!
//! ## Usage
//!
//! ```rust
//! use pantry::ingredient_parser::parse_ingredient;
//! use pantry::unit::Unit;
//!
//! let ingredient = parse_ingredient("1.5 lb. Alaskan salmon");
//! assert_eq!(ingredient.unit, Some(Unit::Pounds));
//! assert_eq!(ingredient.item, "Alaskan salmon");
//! ```

use crate::ingredient_model::Ingredient;
use crate::quantity::Quantity;
use crate::unit::Unit;
use log::{debug, trace};

/// Scan state for one line; built fresh for every call so parses never share state
struct IngredientScanner<'a> {
    parts: Vec<&'a str>,
    index: usize,
    quantity: Quantity,
    unit: Option<Unit>,
}

impl<'a> IngredientScanner<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            parts: line.split_whitespace().collect(),
            index: 0,
            quantity: Quantity::None,
            unit: None,
        }
    }

    fn parse_quantity(&mut self) {
        while let Some(part) = self.parts.get(self.index) {
            match Quantity::from_string(part) {
                Quantity::None => break,
                Quantity::Integer(_) if self.quantity.is_integer() => {
                    trace!("Stopping at back-to-back integer '{}'", part);
                    break;
                }
                integer @ Quantity::Integer(_) => {
                    self.quantity += integer;
                    self.index += 1;
                }
                other => {
                    // only one decimal or fraction is ever accepted
                    self.quantity += other;
                    self.index += 1;
                    break;
                }
            }
        }
    }

    fn parse_unit(&mut self) {
        if let Some(unit) = self.parts.get(self.index).and_then(|part| Unit::from_string(part)) {
            self.unit = Some(unit);
            self.index += 1;
        }
    }

    fn finish(self) -> Ingredient {
        let item = self.parts[self.index..].join(" ");
        Ingredient::new(self.quantity, self.unit, &item)
    }
}

/// Parse a single ingredient line
pub fn parse_ingredient(line: &str) -> Ingredient {
    let mut scanner = IngredientScanner::new(line);

    // a lone word is always the item, even if it looks like a number
    if scanner.parts.len() == 1 {
        return Ingredient::from_item(scanner.parts[0]);
    }

    scanner.parse_quantity();
    scanner.parse_unit();

    let ingredient = scanner.finish();
    debug!(
        "Parsed '{}' -> quantity={:?}, unit={:?}, item='{}'",
        line, ingredient.quantity, ingredient.unit, ingredient.item
    );
    ingredient
}

/// Parse every non-blank line of a pasted list
pub fn parse_ingredient_list(text: &str) -> Vec<Ingredient> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_ingredient)
        .collect()
}
