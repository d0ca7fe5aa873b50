//! # Ingredient and Recipe Data Model
//!
//! This module defines the data structures produced by the parsers: a single
//! ingredient (quantity, unit, item text), the entries of a recipe list, and
//! the recipe draft reconstructed from pasted text.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: an item with an optional amount, e.g. "1 ¾ cup flour"
//! - **RecipeItem**: either a list entry or a sub-heading ("For the sauce")
//! - **RecipeDraft**: title, ingredients and instructions of an imported recipe
//!
//! ## Serialized form
//!
//! Ingredients are stored as their rendered string and parsed back on load,
//! so `to_string` and `parse_ingredient` form the encode/decode pair. Section
//! headings carry the [`SECTION_PREFIX`] marker.
//!
//! ```rust
//! use pantry::ingredient_model::Ingredient;
//! use pantry::quantity::Quantity;
//! use pantry::unit::Unit;
//!
//! let flour = Ingredient::new(Quantity::from_string("1 3/4"), Some(Unit::Cups), "flour");
//! assert_eq!(flour.to_string(), "1 ¾ cup flour");
//! ```

use crate::ingredient_parser::parse_ingredient;
use crate::quantity::Quantity;
use crate::unit::Unit;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Marker prepended to section headings in the serialized form
pub const SECTION_PREFIX: &str = "__SECTION__ ";

/// A parsed ingredient or grocery entry
#[derive(Debug, Clone, Default)]
pub struct Ingredient {
    /// Amount, if one was given
    pub quantity: Quantity,

    /// Unit of measurement, if one was recognized
    pub unit: Option<Unit>,

    /// Everything left over after the amount and unit (e.g. "Alaskan salmon")
    pub item: String,

    /// Checked off on the grocery list; never produced by parsing
    pub complete: bool,
}

impl Ingredient {
    /// Create an ingredient from its parts
    pub fn new(quantity: Quantity, unit: Option<Unit>, item: &str) -> Self {
        Self {
            quantity,
            unit,
            item: item.trim().to_string(),
            complete: false,
        }
    }

    /// Create an ingredient with no amount
    pub fn from_item(item: &str) -> Self {
        Self::new(Quantity::None, None, item)
    }

    /// True when there is no amount, no unit and no item text
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.unit.is_none() && self.item.is_empty()
    }

    /// Add to the current amount, keeping the unit
    pub fn add_quantity(&mut self, quantity: Quantity) {
        self.quantity += quantity;
    }

    pub fn toggle_complete(&mut self) {
        self.complete = !self.complete;
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.quantity.is_none() {
            write!(f, "{} ", self.quantity)?;
        }
        if let Some(unit) = &self.unit {
            write!(f, "{} ", unit)?;
        }
        write!(f, "{}", self.item)
    }
}

// Ingredients are identified by their rendered form
impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl FromStr for Ingredient {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_ingredient(s))
    }
}

impl Serialize for Ingredient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ingredient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(parse_ingredient(&text))
    }
}

/// One line of a recipe's ingredient or instruction list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecipeItem<T> {
    /// Regular list content
    Entry(T),
    /// Sub-heading grouping the entries that follow it
    Section(String),
}

impl<T> RecipeItem<T> {
    pub fn is_section(&self) -> bool {
        matches!(self, RecipeItem::Section(_))
    }

    /// The entry value, or `None` for a section heading
    pub fn entry(&self) -> Option<&T> {
        match self {
            RecipeItem::Entry(value) => Some(value),
            RecipeItem::Section(_) => None,
        }
    }

    /// Transform the entry value, leaving section headings untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> RecipeItem<U> {
        match self {
            RecipeItem::Entry(value) => RecipeItem::Entry(f(value)),
            RecipeItem::Section(heading) => RecipeItem::Section(heading),
        }
    }
}

impl<T: fmt::Display> fmt::Display for RecipeItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeItem::Entry(value) => write!(f, "{}", value),
            RecipeItem::Section(heading) => write!(f, "{}{}", SECTION_PREFIX, heading),
        }
    }
}

impl<T: fmt::Display> Serialize for RecipeItem<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for RecipeItem<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        match text.strip_prefix(SECTION_PREFIX) {
            Some(heading) => Ok(RecipeItem::Section(heading.to_string())),
            None => text.parse().map(RecipeItem::Entry).map_err(de::Error::custom),
        }
    }
}

/// A recipe reconstructed from free text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<RecipeItem<Ingredient>>,
    pub instructions: Vec<RecipeItem<String>>,
}

impl RecipeDraft {
    /// Create an empty draft with the given title
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Ingredients without section headings
    pub fn ingredient_entries(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter_map(RecipeItem::entry)
    }

    /// Instructions without section headings
    pub fn instruction_entries(&self) -> impl Iterator<Item = &String> {
        self.instructions.iter().filter_map(RecipeItem::entry)
    }
}

impl fmt::Display for RecipeDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        writeln!(f, "\nIngredients:")?;
        for item in &self.ingredients {
            match item {
                RecipeItem::Entry(ingredient) => writeln!(f, "  • {}", ingredient)?,
                RecipeItem::Section(heading) => writeln!(f, "  {}:", heading)?,
            }
        }

        writeln!(f, "\nInstructions:")?;
        let mut step = 0;
        for item in &self.instructions {
            match item {
                RecipeItem::Entry(text) => {
                    step += 1;
                    writeln!(f, "  {}. {}", step, text)?;
                }
                RecipeItem::Section(heading) => writeln!(f, "  {}:", heading)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Fraction;

    #[test]
    fn test_ingredient_creation() {
        let ingredient = Ingredient::new(Quantity::Integer(2), Some(Unit::Cups), " flour ");
        assert_eq!(ingredient.item, "flour");
        assert!(!ingredient.complete);
        assert!(!ingredient.is_empty());
        assert!(Ingredient::default().is_empty());
    }

    #[test]
    fn test_display_formatting() {
        let salmon = Ingredient::new(Quantity::Float(1.5), Some(Unit::Pounds), "Alaskan salmon");
        assert_eq!(salmon.to_string(), "1.5 lb. Alaskan salmon");

        let eggs = Ingredient::new(Quantity::Integer(3), None, "eggs");
        assert_eq!(eggs.to_string(), "3 eggs");

        assert_eq!(Ingredient::from_item("salt").to_string(), "salt");
    }

    #[test]
    fn test_equality_uses_rendered_form() {
        let a = Ingredient::new(Quantity::Integer(2), None, "apples");
        let mut b = Ingredient::new(Quantity::Integer(2), None, "apples");
        b.complete = true;
        assert_eq!(a, b);

        let c = Ingredient::new(Quantity::Float(2.0), None, "apples");
        assert_ne!(a, c);
    }

    #[test]
    fn test_add_quantity_and_toggle() {
        let mut ingredient = Ingredient::new(
            Quantity::Fraction(Fraction::new(3, 4).unwrap()),
            Some(Unit::Pounds),
            "meat",
        );
        ingredient.add_quantity(Quantity::Fraction(Fraction::new(1, 4).unwrap()));
        assert_eq!(ingredient.quantity, Quantity::Integer(1));
        assert_eq!(ingredient.unit, Some(Unit::Pounds));

        ingredient.toggle_complete();
        assert!(ingredient.complete);
        ingredient.toggle_complete();
        assert!(!ingredient.complete);
    }

    #[test]
    fn test_ingredient_serializes_as_string() {
        let ingredient = Ingredient::new(
            Quantity::Fraction(Fraction::new(7, 4).unwrap()),
            Some(Unit::Cups),
            "flour",
        );
        let json = serde_json::to_string(&ingredient).unwrap();
        assert_eq!(json, "\"1 ¾ cup flour\"");

        let decoded: Ingredient = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.quantity, Quantity::Fraction(Fraction::new(7, 4).unwrap()));
        assert_eq!(decoded.unit, Some(Unit::Cups));
        assert_eq!(decoded.item, "flour");
    }

    #[test]
    fn test_recipe_item_serialization() {
        let items: Vec<RecipeItem<String>> = vec![
            RecipeItem::Section("For the dough".to_string()),
            RecipeItem::Entry("Knead well".to_string()),
        ];
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(json, r#"["__SECTION__ For the dough","Knead well"]"#);

        let decoded: Vec<RecipeItem<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn test_recipe_draft_entries_skip_sections() {
        let mut draft = RecipeDraft::new("Pancakes");
        draft.ingredients.push(RecipeItem::Section("Batter".to_string()));
        draft
            .ingredients
            .push(RecipeItem::Entry(Ingredient::new(Quantity::Integer(2), None, "eggs")));
        draft.instructions.push(RecipeItem::Entry("Whisk".to_string()));

        assert_eq!(draft.ingredient_entries().count(), 1);
        assert_eq!(draft.instruction_entries().count(), 1);
        assert!(draft.ingredients[0].is_section());

        let display = draft.to_string();
        assert!(display.contains("Pancakes"));
        assert!(display.contains("  Batter:"));
        assert!(display.contains("  • 2 eggs"));
        assert!(display.contains("  1. Whisk"));
    }
}
