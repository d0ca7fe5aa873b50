//! # Recipe Parser Example
//!
//! Imports two pasted recipes, prints their structured form, then merges their
//! ingredients into a single grocery list.

use pantry::{parse_ingredient, GroceryList, RecipeItem, RecipeTextImporter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🍳 Recipe Parser Example");
    println!("========================\n");

    println!("📏 Single lines");
    println!("---------------");
    for line in ["1 3/4 cups flour", "⅔ tsp salt", "1.5 lb. salmon", "a pinch of nutmeg"] {
        let ingredient = parse_ingredient(line);
        println!(
            "  {:<20} -> quantity: {:<5} unit: {:<5} item: {}",
            line,
            ingredient.quantity.to_string(),
            ingredient.unit.map(|u| u.to_string()).unwrap_or_default(),
            ingredient.item
        );
    }

    let cookies = r#"
    Classic Chocolate Chip Cookies
    Makes about 3 dozen.

    Ingredients:
    For the dough
    - 2 1/4 cups all-purpose flour
    - 1 tsp baking soda
    - 1 cup butter, softened
    - ¾ cup sugar
    - 2 eggs

    Instructions:
    1. Preheat oven to 375°F.
    2. Beat butter and sugar, then add eggs.
    3. Bake 9 to 11 minutes.
    "#;

    let brownies = r#"
    Fudgy Brownies

    Ingredients
    • 8 oz. butter
    • 1 lb. sugar
    • 3 eggs
    • ½ cup flour

    Directions
    • Melt butter.
    • Stir everything together and bake.
    "#;

    let importer = RecipeTextImporter::new();
    let mut groceries = GroceryList::new();

    for text in [cookies, brownies] {
        let recipe = importer.parse(text)?;

        println!("\n📖 {}", recipe.title);
        println!("{}", "-".repeat(recipe.title.chars().count() + 3));
        for item in &recipe.ingredients {
            match item {
                RecipeItem::Section(heading) => println!("  [{}]", heading),
                RecipeItem::Entry(ingredient) => println!("  • {}", ingredient),
            }
        }
        for (step, instruction) in recipe.instruction_entries().enumerate() {
            println!("  {}. {}", step + 1, instruction);
        }

        groceries.add_ingredients(&recipe);
    }

    println!("\n🛒 Grocery list ({} entries)", groceries.len());
    println!("-------------------------");
    for grocery in groceries.iter() {
        println!("  [ ] {}", grocery);
    }

    println!("\n📦 As JSON");
    println!("{}", serde_json::to_string_pretty(&groceries)?);

    Ok(())
}
