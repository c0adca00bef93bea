//! Platter CLI - operator tool for the restaurant store

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use platter_core::store::{DEFAULT_COLLECTION, DEFAULT_DATABASE};
use platter_core::{default_restaurants, MongoStore, Restaurant, RestaurantStore, StoreSettings};
use serde_json::json;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "platter")]
#[command(about = "Platter - restaurant catalog and store tool for the Platter gateway")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in restaurant catalog
    Catalog {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Replace the restaurant collection with the built-in catalog
    Seed {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// List restaurants currently in the store
    Restaurants {
        #[command(flatten)]
        store: StoreArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct StoreArgs {
    /// Store connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    mongodb_uri: String,

    /// Database holding the restaurant collection
    #[arg(long, env = "MONGODB_DATABASE", default_value = DEFAULT_DATABASE)]
    database: String,

    /// Restaurant collection name
    #[arg(long, env = "MONGODB_COLLECTION", default_value = DEFAULT_COLLECTION)]
    collection: String,
}

impl StoreArgs {
    fn settings(&self) -> StoreSettings {
        StoreSettings::new(&self.mongodb_uri)
            .with_database(&self.database)
            .with_collection(&self.collection)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Lets env-backed flags pick up a local .env file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("platter=debug")
            .init();
    }

    match cli.command {
        Commands::Catalog { format } => {
            print_restaurants(&default_restaurants(), format)?;
        }
        Commands::Seed { store } => {
            seed_command(store).await?;
        }
        Commands::Restaurants { store, format } => {
            restaurants_command(store, format).await?;
        }
    }

    Ok(())
}

async fn connect(args: &StoreArgs) -> Result<MongoStore> {
    let settings = args.settings();
    println!(
        "{} Connecting to {}.{}...",
        "→".blue(),
        settings.database,
        settings.collection
    );
    MongoStore::connect(&settings)
        .await
        .context("Failed to create store client")
}

async fn seed_command(args: StoreArgs) -> Result<()> {
    let start = Instant::now();
    let store = connect(&args).await?;

    let restaurants = default_restaurants();
    println!(
        "{} Replacing collection contents with {} restaurants...",
        "→".blue(),
        restaurants.len()
    );

    let inserted = store
        .replace_all(&restaurants)
        .await
        .context("Failed to seed restaurants")?;

    println!(
        "{} Seeded {} restaurants in {:.3}s",
        "✓".green(),
        inserted,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

async fn restaurants_command(args: StoreArgs, format: OutputFormat) -> Result<()> {
    let store = connect(&args).await?;
    let restaurants = store
        .list_restaurants()
        .await
        .context("Failed to list restaurants")?;

    print_restaurants(&restaurants, format)
}

fn print_restaurants(restaurants: &[Restaurant], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let envelope = json!({ "restaurants": restaurants });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        OutputFormat::Text => {
            println!("\n{} Restaurants ({})", "═".blue().bold(), restaurants.len());
            for restaurant in restaurants {
                println!(
                    "{} {:>3}  {} {}  {}  {} {:.1}  {}  min order {}",
                    "▸".blue(),
                    restaurant.id,
                    restaurant.image,
                    restaurant.name.bold(),
                    restaurant.cuisine.dimmed(),
                    "★".yellow(),
                    restaurant.rating,
                    restaurant.delivery_time,
                    restaurant.min_order
                );
            }
            if restaurants.is_empty() {
                println!("{} No restaurants found", "!".yellow());
            }
        }
    }

    Ok(())
}
