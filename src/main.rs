//! Scoops
//!
//! Command line front end for analyzing ice cream recipes against an
//! ingredient catalog. Results go to stdout as JSON, logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use scoops::build_info::BuildInfo;
use scoops::catalog::{load_catalog, load_recipe_prototype};
use scoops::config::{Config, CATALOG_PATH_VAR};
use scoops::formulation::analyze;
use scoops::naming::canonicalize_name;
use scoops::recipes::assemble_recipe;

#[derive(Debug, Parser)]
#[command(name = "scoops", version, about = "Ice cream recipe formulation analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the base mix analysis of a recipe
    Analyze(RecipeArgs),
    /// Print the fully assembled recipe, analysis included
    Recipe(RecipeArgs),
    /// Print the canonical form of a recipe name
    Canonicalize { name: String },
    /// Print build information
    BuildInfo,
}

#[derive(Debug, clap::Args)]
struct RecipeArgs {
    /// Ingredient catalog (JSON array of ingredients). Falls back to
    /// SCOOPS_CATALOG_PATH.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Recipe prototype (JSON)
    #[arg(long)]
    recipe: PathBuf,
}

fn init_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("scoops={}", config.log_level).parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.development_logging {
        builder.pretty().init();
    } else {
        builder.with_ansi(false).compact().init();
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn resolve_catalog(args: &RecipeArgs, config: &Config) -> Result<PathBuf, Box<dyn std::error::Error>> {
    args.catalog
        .clone()
        .or_else(|| config.catalog_path.clone())
        .ok_or_else(|| format!("no catalog given; pass --catalog or set {}", CATALOG_PATH_VAR).into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    init_logging(&config)?;

    debug!(build = %BuildInfo::current(), "Starting scoops");

    match cli.command {
        Command::Analyze(args) => {
            let catalog = load_catalog(&resolve_catalog(&args, &config)?)?;
            let prototype = load_recipe_prototype(&args.recipe)?;
            let analysis = analyze(&prototype.ingredients, &catalog)?;
            print_json(&analysis)?;
        }
        Command::Recipe(args) => {
            let catalog = load_catalog(&resolve_catalog(&args, &config)?)?;
            let prototype = load_recipe_prototype(&args.recipe)?;
            let recipe = assemble_recipe(prototype, &catalog)?;
            print_json(&recipe)?;
        }
        Command::Canonicalize { name } => {
            println!("{}", canonicalize_name(&name));
        }
        Command::BuildInfo => {
            print_json(&BuildInfo::current())?;
        }
    }

    Ok(())
}
