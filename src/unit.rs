//! # Measurement Units
//!
//! The fixed weight and volume units understood by the parser, together with
//! conversion between units of the same category, simplification to coarser
//! units, and the combination rule used when merging grocery entries.
//!
//! ## Usage
//!
//! ```rust
//! use pantry::quantity::Quantity;
//! use pantry::unit::Unit;
//!
//! let (quantity, unit) =
//!     Unit::combine(Quantity::Integer(16), Some(Unit::Teaspoons), Quantity::Integer(32), Some(Unit::Teaspoons))
//!         .unwrap();
//! assert_eq!((quantity, unit), (Quantity::Integer(1), Unit::Cups));
//! ```

use crate::errors::{PantryError, PantryResult};
use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

pub const OUNCES_PER_POUND: i64 = 16;
pub const GRAMS_PER_OUNCE: f64 = 28.349523125;
pub const TEASPOONS_PER_TABLESPOON: i64 = 3;
pub const TABLESPOONS_PER_CUP: i64 = 16;

/// Accepted spellings for each unit, matched after periods are stripped
static UNIT_ALIASES: LazyLock<HashMap<&'static str, Unit>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Weight units
    for alias in ["ounce", "ounces", "oz", "ozs"] {
        map.insert(alias, Unit::Ounces);
    }
    for alias in ["pound", "pounds", "lb", "lbs"] {
        map.insert(alias, Unit::Pounds);
    }
    for alias in ["gram", "grams", "g"] {
        map.insert(alias, Unit::Grams);
    }

    // Volume units
    for alias in ["teaspoon", "teaspoons", "tsp", "tsps"] {
        map.insert(alias, Unit::Teaspoons);
    }
    for alias in ["tablespoon", "tablespoons", "tbsp", "tbsps"] {
        map.insert(alias, Unit::Tablespoons);
    }
    for alias in ["cup", "cups", "c"] {
        map.insert(alias, Unit::Cups);
    }

    map
});

/// Physical category a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Weight,
    Volume,
}

/// Measurement units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    // Weight units
    /// Ounces
    Ounces,
    /// Pounds
    Pounds,
    /// Grams
    Grams,

    // Volume units
    /// Teaspoons
    Teaspoons,
    /// Tablespoons
    Tablespoons,
    /// Cups
    Cups,
}

impl Unit {
    /// All units, weights first
    pub const ALL: [Unit; 6] = [
        Unit::Ounces,
        Unit::Pounds,
        Unit::Grams,
        Unit::Teaspoons,
        Unit::Tablespoons,
        Unit::Cups,
    ];

    /// Parse a unit token such as "cups", "lb." or "tbsp".
    ///
    /// Matching is exact and case-sensitive once whitespace and periods are removed.
    pub fn from_string(s: &str) -> Option<Unit> {
        let cleaned = s.trim().replace('.', "");
        UNIT_ALIASES.get(cleaned.as_str()).copied()
    }

    /// Canonical short display form
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Ounces => "oz.",
            Unit::Pounds => "lb.",
            Unit::Grams => "g",
            Unit::Teaspoons => "tsp",
            Unit::Tablespoons => "tbsp",
            Unit::Cups => "cup",
        }
    }

    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Ounces | Unit::Pounds | Unit::Grams => UnitCategory::Weight,
            Unit::Teaspoons | Unit::Tablespoons | Unit::Cups => UnitCategory::Volume,
        }
    }

    /// Whether quantities in this unit can be added to quantities in `other`
    pub fn can_combine_with(&self, other: Option<Unit>) -> bool {
        other.is_some_and(|other| self.category() == other.category())
    }

    /// Convert a quantity between two units of the same category.
    ///
    /// Any path through the gram/ounce factor produces a `Float`.
    pub fn convert(quantity: Quantity, from: Unit, to: Unit) -> PantryResult<Quantity> {
        let converted = match (from, to) {
            _ if from == to => quantity,

            (Unit::Ounces, Unit::Pounds) => quantity / OUNCES_PER_POUND,
            (Unit::Ounces, Unit::Grams) => quantity * GRAMS_PER_OUNCE,
            (Unit::Pounds, Unit::Ounces) => quantity * OUNCES_PER_POUND,
            (Unit::Pounds, Unit::Grams) => quantity * OUNCES_PER_POUND * GRAMS_PER_OUNCE,
            (Unit::Grams, Unit::Ounces) => quantity / GRAMS_PER_OUNCE,
            (Unit::Grams, Unit::Pounds) => {
                quantity / (OUNCES_PER_POUND as f64 * GRAMS_PER_OUNCE)
            }

            (Unit::Teaspoons, Unit::Tablespoons) => quantity / TEASPOONS_PER_TABLESPOON,
            (Unit::Teaspoons, Unit::Cups) => {
                quantity / (TEASPOONS_PER_TABLESPOON * TABLESPOONS_PER_CUP)
            }
            (Unit::Tablespoons, Unit::Teaspoons) => quantity * TEASPOONS_PER_TABLESPOON,
            (Unit::Tablespoons, Unit::Cups) => quantity / TABLESPOONS_PER_CUP,
            (Unit::Cups, Unit::Teaspoons) => {
                quantity * TABLESPOONS_PER_CUP * TEASPOONS_PER_TABLESPOON
            }
            (Unit::Cups, Unit::Tablespoons) => quantity * TABLESPOONS_PER_CUP,

            _ => return Err(PantryError::InvalidConversion { from, to }),
        };
        Ok(converted)
    }

    /// Move a quantity up to the next coarser unit once it reaches at least one of it.
    ///
    /// Teaspoons may climb twice (to tablespoons, then cups). Grams, pounds and
    /// cups are never simplified further.
    pub fn simplify(quantity: Quantity, unit: Unit) -> (Quantity, Unit) {
        match unit {
            Unit::Ounces => {
                let pounds = quantity / OUNCES_PER_POUND;
                if pounds.as_float() >= 1.0 {
                    return (pounds, Unit::Pounds);
                }
            }
            Unit::Teaspoons => {
                let tablespoons = quantity / TEASPOONS_PER_TABLESPOON;
                if tablespoons.as_float() >= 1.0 {
                    return Unit::simplify(tablespoons, Unit::Tablespoons);
                }
            }
            Unit::Tablespoons => {
                let cups = quantity / TABLESPOONS_PER_CUP;
                if cups.as_float() >= 1.0 {
                    return (cups, Unit::Cups);
                }
            }
            Unit::Pounds | Unit::Grams | Unit::Cups => {}
        }
        (quantity, unit)
    }

    /// Add two measured quantities, converting and simplifying as needed.
    ///
    /// Returns `None` if either unit is missing or the units measure different
    /// things. Mixed weights are summed in ounces unless both are grams; mixed
    /// volumes are summed in teaspoons.
    pub fn combine(
        quantity_a: Quantity,
        unit_a: Option<Unit>,
        quantity_b: Quantity,
        unit_b: Option<Unit>,
    ) -> Option<(Quantity, Unit)> {
        let (unit_a, unit_b) = (unit_a?, unit_b?);
        if !unit_a.can_combine_with(Some(unit_b)) {
            return None;
        }

        if unit_a == unit_b {
            return Some(Unit::simplify(quantity_a + quantity_b, unit_a));
        }

        let target = match unit_a.category() {
            UnitCategory::Weight if unit_a == Unit::Grams && unit_b == Unit::Grams => Unit::Grams,
            UnitCategory::Weight => Unit::Ounces,
            UnitCategory::Volume => Unit::Teaspoons,
        };
        let a = Unit::convert(quantity_a, unit_a, target).ok()?;
        let b = Unit::convert(quantity_b, unit_b, target).ok()?;
        Some(Unit::simplify(a + b, target))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
