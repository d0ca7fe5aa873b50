//! # Grocery List Tests
//!
//! Merging of recipe ingredients into a shopping list and check-off handling.

use pantry::quantity::Quantity;
use pantry::{parse_ingredient, parse_recipe_text, GroceryList, Ingredient, Unit};

fn list_of(lines: &[&str]) -> GroceryList {
    let mut list = GroceryList::new();
    for line in lines {
        list.add(parse_ingredient(line));
    }
    list
}

#[test]
fn test_recipes_merge_into_one_list() {
    let pancakes = parse_recipe_text(
        "Pancakes\nIngredients\n- 1 cup flour\n- 2 eggs\n- 1 cup milk\nDirections\n1. Whisk",
    )
    .unwrap();
    let cake = parse_recipe_text(
        "Sponge Cake\nIngredients\nBatter\n- 2 tbsp flour\n- 3 eggs\n- 8 oz. butter\nInstructions\n1. Bake",
    )
    .unwrap();

    let mut list = GroceryList::new();
    list.add_ingredients(&pancakes);
    list.add_ingredients(&cake);

    assert_eq!(list.len(), 4);
    let flour = list.grocery_at(0).unwrap();
    assert_eq!(flour.item, "flour");
    assert_eq!(flour.quantity, Quantity::Float(1.125));
    assert_eq!(flour.unit, Some(Unit::Cups));

    assert_eq!(list.grocery_at(1).unwrap().to_string(), "5 eggs");
    assert_eq!(list.grocery_at(2).unwrap().to_string(), "1 cup milk");
    assert_eq!(list.grocery_at(3).unwrap().to_string(), "8 oz. butter");
}

#[test]
fn test_weights_are_simplified() {
    let list = list_of(&["1 lb butter", "8 oz butter"]);
    assert_eq!(list.len(), 1);
    let butter = list.grocery_at(0).unwrap();
    assert_eq!(butter.quantity, Quantity::Float(1.5));
    assert_eq!(butter.unit, Some(Unit::Pounds));
}

#[test]
fn test_grams_stay_grams() {
    let list = list_of(&["500 g rice", "250 g rice"]);
    assert_eq!(list.len(), 1);
    let rice = list.grocery_at(0).unwrap();
    assert_eq!(rice.quantity, Quantity::Integer(750));
    assert_eq!(rice.unit, Some(Unit::Grams));
}

#[test]
fn test_incompatible_entries_stay_separate() {
    let list = list_of(&["1 cup sugar", "100 g sugar", "sugar", "1 cup brown sugar"]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_toggle_merges_into_completed_entry() {
    let mut list = list_of(&["2 eggs"]);
    assert_eq!(list.toggle_complete(0), Some(0));
    assert!(list.incomplete().is_empty());

    list.add(parse_ingredient("3 eggs"));
    assert_eq!(list.len(), 2);

    assert_eq!(list.toggle_complete(0), Some(0));
    assert_eq!(list.len(), 1);
    assert_eq!(list.complete()[0].to_string(), "5 eggs");
    assert!(list.complete()[0].complete);
}

#[test]
fn test_reopened_items_go_to_the_tail() {
    let mut list = list_of(&["milk", "bread", "jam"]);
    assert_eq!(list.toggle_complete(0), Some(2));
    assert_eq!(list.toggle_complete(2), Some(2));

    let items: Vec<_> = list.iter().map(|g| g.item.as_str()).collect();
    assert_eq!(items, ["bread", "jam", "milk"]);
    assert!(list.iter().all(|g| !g.complete));
}

#[test]
fn test_replace_and_remove() {
    let mut list = list_of(&["2 onions", "1 cup rice", "garlic"]);

    assert_eq!(list.replace(2, parse_ingredient("3 onions")), Some(0));
    assert_eq!(list.len(), 2);
    assert_eq!(list.grocery_at(0).unwrap().to_string(), "5 onions");

    assert_eq!(list.replace(1, parse_ingredient("2 cup rice")), Some(1));
    assert_eq!(list.grocery_at(1).unwrap().quantity, Quantity::Integer(2));

    assert_eq!(list.remove(5), None);
    assert_eq!(list.remove(0).map(|g| g.item), Some("onions".to_string()));
    list.clear();
    assert!(list.is_empty());
}

#[test]
fn test_serde_restores_complete_flags() {
    let mut list = list_of(&["2 eggs", "1 lb. butter", "salt"]);
    list.toggle_complete(1);

    let json = serde_json::to_string(&list).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["incomplete"], serde_json::json!(["2 eggs", "salt"]));
    assert_eq!(value["complete"], serde_json::json!(["1 lb. butter"]));

    let decoded: GroceryList = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, list);
    assert!(decoded.complete().iter().all(|g| g.complete));
    assert!(decoded.incomplete().iter().all(|g| !g.complete));
    assert_eq!(
        decoded.complete()[0],
        Ingredient::new(Quantity::Integer(1), Some(Unit::Pounds), "butter")
    );
}

#[test]
fn test_huge_amounts_merge_without_panicking() {
    let list = list_of(&["200000000000000000 cups sugar", "1 tsp sugar"]);
    assert_eq!(list.len(), 1);
    let sugar = list.grocery_at(0).unwrap();
    assert!(matches!(sugar.quantity, Quantity::Float(_)));
    assert_eq!(sugar.unit, Some(Unit::Cups));
}
