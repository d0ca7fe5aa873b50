//! # Text Processing Module
//!
//! This module reconstructs a structured recipe from unstructured pasted or
//! shared text: a title, an ingredient list and an instruction list, with
//! optional sub-section headings inside either list.
//!
//! ## Features
//!
//! - The first non-blank line is the title
//! - An "Ingredients" heading opens the ingredient list, an "Instructions" or
//!   "Directions" heading opens the instruction list
//! - Bulleted (`-`, `*`, `+`, `⁃`, `•`) and numbered (`1.`) lines are list
//!   entries; other lines inside a list are treated as sub-section headings
//! - Anything before the ingredients heading is ignored
//!
//! ## Usage
//!
//! ```rust
//! use pantry::text_processing::parse_recipe_text;
//!
//! let text = "Pancakes\n\nIngredients\n- 2 eggs\n- 1 cup milk\n\nDirections\n1. Whisk\n2. Fry";
//! let recipe = parse_recipe_text(text)?;
//!
//! assert_eq!(recipe.title, "Pancakes");
//! assert_eq!(recipe.ingredients.len(), 2);
//! assert_eq!(recipe.instructions.len(), 2);
//! # Ok::<(), pantry::errors::PantryError>(())
//! ```

use crate::config::ImporterConfig;
use crate::errors::{PantryError, PantryResult};
use crate::ingredient_model::{RecipeDraft, RecipeItem};
use crate::ingredient_parser::parse_ingredient;
use crate::measurement_patterns::LIST_MARKER_REGEX;
use log::{debug, info, trace};

/// Section of the recipe the importer is currently reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportState {
    /// Between the title and the ingredients heading; lines are dropped
    Preamble,
    Ingredients,
    Instructions,
}

/// Heuristic importer for free-form recipe text
#[derive(Debug, Clone, Default)]
pub struct RecipeTextImporter {
    config: ImporterConfig,
}

impl RecipeTextImporter {
    /// Create an importer recognizing the default headings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer with custom headings
    ///
    /// # Errors
    ///
    /// Returns `PantryError::Config` if the configuration fails validation.
    pub fn with_config(config: ImporterConfig) -> PantryResult<Self> {
        config.validate()?;
        debug!(
            "Creating RecipeTextImporter: ingredients={:?}, instructions={:?}",
            config.ingredients_headings, config.instructions_headings
        );
        Ok(Self { config })
    }

    // callers pass the lowercased line
    fn starts_ingredients(&self, line: &str) -> bool {
        self.config
            .ingredients_headings
            .iter()
            .any(|heading| line.starts_with(heading.as_str()))
    }

    fn starts_instructions(&self, line: &str) -> bool {
        self.config
            .instructions_headings
            .iter()
            .any(|heading| line.starts_with(heading.as_str()))
    }

    /// Parse a recipe out of free text
    ///
    /// # Errors
    ///
    /// Returns `PantryError::Parse` when the text has no non-blank lines.
    pub fn parse(&self, text: &str) -> PantryResult<RecipeDraft> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let (title, body) = lines
            .split_first()
            .ok_or_else(|| PantryError::Parse("Empty input".to_string()))?;

        debug!("Importing recipe '{}' from {} lines", title, lines.len());
        let mut draft = RecipeDraft::new(title);
        let mut state = ImportState::Preamble;

        for line in body {
            let lowered = line.to_lowercase();
            match state {
                ImportState::Preamble if self.starts_ingredients(&lowered) => {
                    state = ImportState::Ingredients;
                    continue;
                }
                ImportState::Ingredients if self.starts_instructions(&lowered) => {
                    state = ImportState::Instructions;
                    continue;
                }
                ImportState::Preamble => {
                    trace!("Skipping preamble line: '{}'", line);
                    continue;
                }
                ImportState::Ingredients | ImportState::Instructions => {}
            }

            let Some(item) = classify_line(line) else {
                trace!("Dropping empty list entry: '{}'", line);
                continue;
            };

            if state == ImportState::Ingredients {
                draft.ingredients.push(item.map(|text| parse_ingredient(&text)));
            } else {
                draft.instructions.push(item);
            }
        }

        info!(
            "Imported recipe '{}' with {} ingredients and {} instructions",
            draft.title,
            draft.ingredients.len(),
            draft.instructions.len()
        );
        Ok(draft)
    }
}

/// Strip a leading list marker, or treat the whole line as a section heading.
///
/// Returns `None` when only a marker is left.
fn classify_line(line: &str) -> Option<RecipeItem<String>> {
    match LIST_MARKER_REGEX.captures(line) {
        Some(captures) => {
            let content = captures.get(1).map_or("", |m| m.as_str()).trim();
            (!content.is_empty()).then(|| RecipeItem::Entry(content.to_string()))
        }
        None => {
            trace!("Treating '{}' as a section heading", line);
            Some(RecipeItem::Section(line.to_string()))
        }
    }
}

/// Parse a recipe with the default headings
pub fn parse_recipe_text(text: &str) -> PantryResult<RecipeDraft> {
    RecipeTextImporter::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_line() {
        assert_eq!(
            classify_line("- 2 eggs"),
            Some(RecipeItem::Entry("2 eggs".to_string()))
        );
        assert_eq!(
            classify_line("3. Bake"),
            Some(RecipeItem::Entry("Bake".to_string()))
        );
        assert_eq!(
            classify_line("For the glaze"),
            Some(RecipeItem::Section("For the glaze".to_string()))
        );
        assert_eq!(classify_line("-"), None);
        assert_eq!(classify_line("•   "), None);
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(parse_recipe_text(""), Err(PantryError::Parse(_))));
        assert!(matches!(parse_recipe_text("  \n\n \t\n"), Err(PantryError::Parse(_))));
    }

    #[test]
    fn test_title_only() {
        let draft = parse_recipe_text("  Grandma's Meatballs \n").unwrap();
        assert_eq!(draft.title, "Grandma's Meatballs");
        assert!(draft.ingredients.is_empty());
        assert!(draft.instructions.is_empty());
    }

    #[test]
    fn test_headings_are_discarded() {
        let draft = parse_recipe_text("Toast\nINGREDIENTS:\n- bread\nDirections:\n- toast it").unwrap();
        assert_eq!(draft.ingredients.len(), 1);
        assert_eq!(draft.instructions, vec![RecipeItem::Entry("toast it".to_string())]);
    }

    #[test]
    fn test_custom_headings() {
        let config = ImporterConfig {
            ingredients_headings: vec!["you will need".to_string()],
            instructions_headings: vec!["method".to_string()],
        };
        let importer = RecipeTextImporter::with_config(config).unwrap();
        let draft = importer
            .parse("Soup\nYou will need:\n- 1 onion\nMethod\n- Chop")
            .unwrap();
        assert_eq!(draft.ingredient_entries().count(), 1);
        assert_eq!(draft.instruction_entries().count(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ImporterConfig {
            instructions_headings: vec![" ".to_string()],
            ..Default::default()
        };
        assert!(RecipeTextImporter::with_config(config).is_err());
    }
}
