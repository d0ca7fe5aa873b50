use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use pantry::config::ImporterConfig;
use pantry::{parse_ingredient, GroceryList, RecipeDraft, RecipeTextImporter};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pantry",
    about = "Parse ingredient lines, import recipes and build grocery lists"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse ingredient lines into quantity, unit and item
    Parse {
        #[arg(required = true, allow_hyphen_values = true)]
        lines: Vec<String>,
    },
    /// Import a recipe from free text and print it as JSON
    Import {
        /// Recipe file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Build a merged grocery list from recipe files
    Groceries {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = ImporterConfig::from_env().context("Invalid importer configuration")?;
    let importer = RecipeTextImporter::with_config(config)?;

    match cli.command {
        Command::Parse { lines } => {
            debug!("Parsing {} ingredient lines", lines.len());
            for line in &lines {
                let ingredient = parse_ingredient(line);
                let unit = ingredient.unit.map(|u| u.to_string()).unwrap_or_default();
                println!("{}\t{}\t{}", ingredient.quantity, unit, ingredient.item);
            }
        }
        Command::Import { file } => {
            let text = read_input(file.as_deref())?;
            let recipe = importer.parse(&text)?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        Command::Groceries { files } => {
            let mut groceries = GroceryList::new();
            for path in &files {
                let recipe: RecipeDraft = importer
                    .parse(&read_input(Some(path.as_path()))?)
                    .with_context(|| format!("Failed to import recipe from {}", path.display()))?;
                groceries.add_ingredients(&recipe);
            }
            info!("Grocery list has {} entries", groceries.len());
            println!("{}", serde_json::to_string_pretty(&groceries)?);
        }
    }

    Ok(())
}

/// Read a file, or stdin when no path (or "-") is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read recipe text from stdin")?;
            Ok(text)
        }
    }
}
