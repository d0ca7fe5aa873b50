//! # Ingredient Parser Tests
//!
//! Line-level parsing of grocery and recipe ingredient strings.

use pantry::quantity::{Fraction, Quantity};
use pantry::{parse_ingredient, Ingredient, Unit};

fn frac(dividend: i64, divisor: i64) -> Quantity {
    Quantity::Fraction(Fraction::new(dividend, divisor).unwrap())
}

fn assert_parsed(line: &str, quantity: Quantity, unit: Option<Unit>, item: &str) {
    let ingredient = parse_ingredient(line);
    assert_eq!(ingredient.quantity, quantity, "quantity of '{}'", line);
    assert_eq!(ingredient.unit, unit, "unit of '{}'", line);
    assert_eq!(ingredient.item, item, "item of '{}'", line);
    assert!(!ingredient.complete);
}

#[test]
fn test_no_quantity() {
    assert_parsed("Eggs", Quantity::None, None, "Eggs");
    assert_parsed(" All-purpose  flour", Quantity::None, None, "All-purpose flour");
    assert_parsed("Paper towels ", Quantity::None, None, "Paper towels");
}

#[test]
fn test_basic_quantity() {
    assert_parsed("2 apples", Quantity::Integer(2), None, "apples");
    assert_parsed(
        "12  brown-butter chocolate chip cookies",
        Quantity::Integer(12),
        None,
        "brown-butter chocolate chip cookies",
    );
}

#[test]
fn test_decimal_quantity() {
    assert_parsed(
        "1.5 lb. Alaskan salmon",
        Quantity::Float(1.5),
        Some(Unit::Pounds),
        "Alaskan salmon",
    );
    assert_parsed(
        "0.123 ounces chocolate chips",
        Quantity::Float(0.123),
        Some(Unit::Ounces),
        "chocolate chips",
    );
}

#[test]
fn test_fraction_quantity() {
    assert_parsed("1/2 lb chicken breast", frac(1, 2), Some(Unit::Pounds), "chicken breast");
    assert_parsed("1 3/4 cups flour", frac(7, 4), Some(Unit::Cups), "flour");
    assert_parsed("10 5/8 tsp cinnamon", frac(85, 8), Some(Unit::Teaspoons), "cinnamon");
}

#[test]
fn test_unicode_fraction_quantity() {
    assert_parsed("⅔ onion", frac(2, 3), None, "onion");
    assert_parsed("⅔ tsp salt", frac(2, 3), Some(Unit::Teaspoons), "salt");
    assert_parsed("1¼ cups whole   milk", frac(5, 4), Some(Unit::Cups), "whole milk");
    assert_parsed("3 ⅞ beef ribs", frac(31, 8), None, "beef ribs");
}

#[test]
fn test_unit_matching_is_case_sensitive() {
    assert_parsed("2 Cups flour", Quantity::Integer(2), None, "Cups flour");
}

#[test]
fn test_unrecognized_tokens_fall_through() {
    assert_parsed("2-3 cloves garlic", Quantity::None, None, "2-3 cloves garlic");
    assert_parsed("a pinch of salt", Quantity::None, None, "a pinch of salt");
    assert_parsed("3 kg potatoes", Quantity::Integer(3), None, "kg potatoes");
}

#[test]
fn test_rendered_form_parses_back() {
    let originals = [
        Ingredient::new(frac(7, 4), Some(Unit::Cups), "flour"),
        Ingredient::new(Quantity::Float(1.5), Some(Unit::Pounds), "Alaskan salmon"),
        Ingredient::new(Quantity::Integer(5), None, "eggs"),
        Ingredient::new(frac(2, 3), Some(Unit::Ounces), "dark chocolate"),
        Ingredient::from_item("salt and pepper"),
    ];

    for original in originals {
        let reparsed: Ingredient = original.to_string().parse().unwrap();
        assert_eq!(reparsed, original);
        assert_eq!(reparsed.quantity, original.quantity);
        assert_eq!(reparsed.unit, original.unit);
    }
}

#[test]
fn test_parser_is_reentrant() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let line = format!("{} 1/2 cups stock", i + 1);
                parse_ingredient(&line)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let ingredient = handle.join().unwrap();
        assert_eq!(ingredient.quantity, frac(2 * (i as i64 + 1) + 1, 2));
        assert_eq!(ingredient.unit, Some(Unit::Cups));
        assert_eq!(ingredient.item, "stock");
    }
}
