//! # Pantry
//!
//! Turns free-form cooking text into structured data: ingredient lines become
//! quantity/unit/item triples with exact fraction arithmetic, duplicate grocery
//! entries are merged across compatible units, and pasted recipes are split
//! into title, ingredients and instructions.

pub mod config;
pub mod errors;
pub mod grocery_list;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod measurement_patterns;
pub mod quantity;
pub mod text_processing;
pub mod unit;

// Re-export types for easier access
pub use errors::{PantryError, PantryResult};
pub use grocery_list::GroceryList;
pub use ingredient_model::{Ingredient, RecipeDraft, RecipeItem};
pub use ingredient_parser::parse_ingredient;
pub use quantity::{Fraction, Quantity};
pub use text_processing::{parse_recipe_text, RecipeTextImporter};
pub use unit::Unit;
