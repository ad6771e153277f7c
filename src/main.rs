use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealgrid::{Planner, cli};
use mealgrid_mealplan::MealSlotKey;
use mealgrid_shared::FileStore;

/// mealgrid - weekly meal planner with a grocery list
#[derive(Parser)]
#[command(name = "mealgrid")]
#[command(about = "Plan the week's meals and get the grocery list for free", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Store file (overrides config file)
    #[arg(long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the weekly grid
    Plan,
    /// Show the meal planned for a cell, e.g. monday-dinner
    Show { cell: MealSlotKey },
    /// Plan a meal for a cell
    Set {
        cell: MealSlotKey,
        name: String,
        /// One ingredient per flag, repeat as needed
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
    },
    /// Remove the meal planned for a cell
    Remove { cell: MealSlotKey },
    /// Add a grocery item
    Add { item: String },
    /// Remove a grocery item and its purchase mark
    Drop { item: String },
    /// Mark a grocery item purchased, or unmark it
    Toggle { item: String },
    /// Print the grocery list
    List,
    /// Clear all meals, groceries and purchase history
    Clear {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealgrid::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealgrid::observability::init_observability(
        "mealgrid",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let path = cli.store.unwrap_or(config.store.path);
    let mut planner = Planner::load(FileStore::open(&path)?);
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Plan => cli::print_plan(&planner, &mut out),
        Commands::Show { cell } => cli::show_cell(&planner, cell, &mut out),
        Commands::Set {
            cell,
            name,
            ingredients,
        } => cli::set_meal(&mut planner, cell, &name, &ingredients, &mut out),
        Commands::Remove { cell } => cli::remove_meal(&mut planner, cell, &mut out),
        Commands::Add { item } => cli::add_item(&mut planner, &item, &mut out),
        Commands::Drop { item } => cli::remove_item(&mut planner, &item, &mut out),
        Commands::Toggle { item } => cli::toggle_item(&mut planner, &item, &mut out),
        Commands::List => cli::print_list(&planner, &mut out),
        Commands::Clear { yes } => cli::clear_all(&mut planner, yes, &mut out),
    }
}
