//! # Grocery List
//!
//! An ordered grocery list split into not-yet-bought (`incomplete`) and
//! checked-off (`complete`) entries. Adding an item that already exists with
//! a compatible unit merges the amounts instead of adding a duplicate line.
//!
//! Entries are addressed by a *logical index* spanning both halves: first the
//! incomplete entries, then the complete ones.
//!
//! ```rust
//! use pantry::grocery_list::GroceryList;
//! use pantry::ingredient_parser::parse_ingredient;
//!
//! let mut list = GroceryList::new();
//! list.add(parse_ingredient("2 eggs"));
//! list.add(parse_ingredient("3 eggs"));
//! assert_eq!(list.len(), 1);
//! assert_eq!(list.grocery_at(0).unwrap().to_string(), "5 eggs");
//! ```

use crate::ingredient_model::{Ingredient, RecipeDraft};
use crate::unit::Unit;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Which half of the list a logical index falls in, with the row inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Incomplete(usize),
    Complete(usize),
}

/// Grocery list with merge-on-add semantics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "GroceryListRecord")]
pub struct GroceryList {
    incomplete: Vec<Ingredient>,
    complete: Vec<Ingredient>,
}

/// Stored shape; the `complete` flag is implied by which list an entry is in
#[derive(Deserialize)]
struct GroceryListRecord {
    #[serde(default)]
    incomplete: Vec<Ingredient>,
    #[serde(default)]
    complete: Vec<Ingredient>,
}

impl From<GroceryListRecord> for GroceryList {
    fn from(record: GroceryListRecord) -> Self {
        let mut list = GroceryList {
            incomplete: record.incomplete,
            complete: record.complete,
        };
        list.incomplete.iter_mut().for_each(|g| g.complete = false);
        list.complete.iter_mut().for_each(|g| g.complete = true);
        list
    }
}

/// Merge `ingredient` into the first compatible entry of `list` with the same item text.
///
/// Entries with combinable units are combined (and simplified); entries where
/// neither side has a unit have their amounts added. The entry at `excluding`
/// is never considered. Returns the row that absorbed the ingredient.
pub fn merge_candidate(
    list: &mut [Ingredient],
    ingredient: &Ingredient,
    excluding: Option<usize>,
) -> Option<usize> {
    for (row, other) in list.iter_mut().enumerate() {
        if Some(row) == excluding || other.item != ingredient.item {
            continue;
        }
        match ingredient.unit {
            Some(unit) if unit.can_combine_with(other.unit) => {
                if let Some((quantity, unit)) =
                    Unit::combine(ingredient.quantity, ingredient.unit, other.quantity, other.unit)
                {
                    debug!("Merged '{}' into row {} -> {} {}", ingredient, row, quantity, unit);
                    other.quantity = quantity;
                    other.unit = Some(unit);
                    return Some(row);
                }
            }
            None if other.unit.is_none() => {
                other.add_quantity(ingredient.quantity);
                debug!("Merged '{}' into row {} -> '{}'", ingredient, row, other);
                return Some(row);
            }
            _ => {}
        }
    }
    None
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.incomplete.len() + self.complete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incomplete.is_empty() && self.complete.is_empty()
    }

    pub fn incomplete(&self) -> &[Ingredient] {
        &self.incomplete
    }

    pub fn complete(&self) -> &[Ingredient] {
        &self.complete
    }

    /// All entries in logical order
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.incomplete.iter().chain(self.complete.iter())
    }

    fn locate(&self, index: usize) -> Option<Slot> {
        if index < self.incomplete.len() {
            Some(Slot::Incomplete(index))
        } else if index < self.len() {
            Some(Slot::Complete(index - self.incomplete.len()))
        } else {
            None
        }
    }

    /// Merge into `list` if possible, otherwise insert at `at` (or append)
    fn insert_or_merge(list: &mut Vec<Ingredient>, grocery: Ingredient, at: Option<usize>) -> usize {
        if let Some(row) = merge_candidate(list, &grocery, None) {
            return row;
        }
        match at {
            Some(row) => {
                list.insert(row, grocery);
                row
            }
            None => {
                list.push(grocery);
                list.len() - 1
            }
        }
    }

    /// Entry at a logical index
    pub fn grocery_at(&self, index: usize) -> Option<&Ingredient> {
        match self.locate(index)? {
            Slot::Incomplete(row) => self.incomplete.get(row),
            Slot::Complete(row) => self.complete.get(row),
        }
    }

    /// Add an item to the incomplete list, merging with a compatible duplicate.
    ///
    /// Returns the logical index of the entry that now holds the item.
    pub fn add(&mut self, mut ingredient: Ingredient) -> usize {
        trace!("Adding '{}' to grocery list", ingredient);
        ingredient.complete = false;
        Self::insert_or_merge(&mut self.incomplete, ingredient, None)
    }

    /// Add every ingredient of a recipe, skipping section headings
    pub fn add_ingredients(&mut self, recipe: &RecipeDraft) {
        let before = self.len();
        for ingredient in recipe.ingredient_entries() {
            self.add(ingredient.clone());
        }
        debug!(
            "Added ingredients of '{}': {} new entries",
            recipe.title,
            self.len() - before
        );
    }

    /// Check an item off (or back on) and move it to the other half of the list.
    ///
    /// Newly completed items go to the head of the complete list; reopened
    /// items go to the tail of the incomplete list. Returns the new logical index.
    pub fn toggle_complete(&mut self, index: usize) -> Option<usize> {
        match self.locate(index)? {
            Slot::Incomplete(row) => {
                let mut grocery = self.incomplete.remove(row);
                grocery.toggle_complete();
                let row = Self::insert_or_merge(&mut self.complete, grocery, Some(0));
                Some(self.incomplete.len() + row)
            }
            Slot::Complete(row) => {
                let mut grocery = self.complete.remove(row);
                grocery.toggle_complete();
                Some(Self::insert_or_merge(&mut self.incomplete, grocery, None))
            }
        }
    }

    /// Replace the entry at `index`.
    ///
    /// If the new value can merge into another entry of the same half, the
    /// original slot is removed and the merged entry's logical index returned;
    /// otherwise the slot is overwritten in place.
    pub fn replace(&mut self, index: usize, mut grocery: Ingredient) -> Option<usize> {
        let offset = self.incomplete.len();
        let (list, row, offset, complete) = match self.locate(index)? {
            Slot::Incomplete(row) => (&mut self.incomplete, row, 0, false),
            Slot::Complete(row) => (&mut self.complete, row, offset, true),
        };
        grocery.complete = complete;

        match merge_candidate(list, &grocery, Some(row)) {
            Some(target) => {
                list.remove(row);
                let target = if target > row { target - 1 } else { target };
                Some(offset + target)
            }
            None => {
                list[row] = grocery;
                Some(index)
            }
        }
    }

    /// Remove and return the entry at a logical index
    pub fn remove(&mut self, index: usize) -> Option<Ingredient> {
        match self.locate(index)? {
            Slot::Incomplete(row) => Some(self.incomplete.remove(row)),
            Slot::Complete(row) => Some(self.complete.remove(row)),
        }
    }

    pub fn clear(&mut self) {
        self.incomplete.clear();
        self.complete.clear();
    }
}
