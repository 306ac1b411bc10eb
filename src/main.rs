use anyhow::Result;
use clap::{Parser, Subcommand};
use pantrychef::catalog::load_catalog;
use recipe_ranking::{rank, Pantry, ScoredRecipe};
use std::path::Path;

/// pantrychef - recipe suggestions from what you already have
#[derive(Parser)]
#[command(name = "pantrychef")]
#[command(about = "Ranks recipes against the ingredients in your pantry", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog against a comma-separated pantry list
    Suggest {
        /// Comma-separated ingredients, e.g. "chicken breast, rice, onion"
        pantry: String,

        /// Catalog file path (overrides config file)
        #[arg(long)]
        catalog: Option<String>,

        /// How many recipes to show (overrides config file)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Load and validate the recipe catalog
    Check {
        /// Catalog file path (overrides config file)
        #[arg(long)]
        catalog: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantrychef::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantrychef::observability::init_observability(
        "pantrychef",
        &config.logging.level,
        &config.logging.format,
    )?;

    match cli.command {
        Commands::Suggest {
            pantry,
            catalog,
            limit,
        } => suggest_command(config, pantry, catalog, limit),
        Commands::Check { catalog } => check_command(config, catalog),
    }
}

#[tracing::instrument(skip(config, pantry_text))]
fn suggest_command(
    config: pantrychef::config::Config,
    pantry_text: String,
    catalog_override: Option<String>,
    limit_override: Option<usize>,
) -> Result<()> {
    let catalog_path = catalog_override.unwrap_or(config.catalog.path);
    let limit = limit_override.unwrap_or(config.display.limit);

    // Input validation happens before the catalog is even touched; an
    // unusable pantry never reaches the ranking engine.
    let pantry = Pantry::parse(&pantry_text).map_err(pantrychef::AppError::Ranking)?;

    let catalog = load_catalog(Path::new(&catalog_path))?;

    tracing::info!(
        pantry_size = pantry.len(),
        catalog_size = catalog.len(),
        "Ranking recipes"
    );
    println!(
        "Searching for recipes with your {} ingredients...",
        pantry.len()
    );

    let ranked = rank(&pantry, &catalog);

    if ranked.is_empty() {
        // A valid empty result, distinct from the input-validation failure.
        println!(
            "Couldn't find any recipes with your ingredients. \
             Try adding more common items like 'salt', 'pepper', or 'olive oil'."
        );
        return Ok(());
    }

    println!(
        "Found and ranked {} recipes for you! Here are the top {}:\n",
        ranked.len(),
        limit.min(ranked.len())
    );

    for scored in ranked.iter().take(limit) {
        print_scored_recipe(scored);
    }

    Ok(())
}

fn print_scored_recipe(scored: &ScoredRecipe<'_>) {
    println!("## {}", scored.recipe.name);
    println!("   Match score: {:.0}", scored.score);

    if scored.is_perfect_match() {
        println!("   You have all the ingredients for this recipe!");
    } else {
        let missing: Vec<&str> = scored
            .missing_ingredients
            .iter()
            .map(String::as_str)
            .collect();
        println!(
            "   Missing {} ingredient(s): {}",
            scored.missing_count(),
            missing.join(", ")
        );
    }

    println!("   Popularity rating: {:.2}/5.0", scored.recipe.rating);
    println!("   Complexity: {} steps", scored.recipe.complexity);

    let all: Vec<&str> = scored
        .recipe
        .ingredients
        .iter()
        .map(String::as_str)
        .collect();
    println!("   Full ingredient list: {}\n", all.join(", "));
}

#[tracing::instrument(skip(config))]
fn check_command(config: pantrychef::config::Config, catalog_override: Option<String>) -> Result<()> {
    let catalog_path = catalog_override.unwrap_or(config.catalog.path);

    let catalog = load_catalog(Path::new(&catalog_path))?;

    println!(
        "Catalog '{}' is valid: {} recipes",
        catalog_path,
        catalog.len()
    );

    Ok(())
}
