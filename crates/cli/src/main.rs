//! hrdoc CLI - build HR records and store them in MongoDB

mod input;
mod logging;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use hrdoc_core::application::{sample_input, HrRecordService};
use hrdoc_infra_mongodb::{
    MongoConfig, MongoHrRecordRepository, DEFAULT_COLLECTION, DEFAULT_DB_NAME, DEFAULT_URL,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Parser)]
#[command(name = "hrdoc")]
#[command(about = "Build nested HR records and insert them into MongoDB", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a sample flat input as JSON
    Example,

    /// Build the nested record from a flat input file and print it
    Render {
        /// Flat input JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Build a record and insert it into the collection
    Insert {
        /// Input JSON file (flat unless --nested)
        #[arg(short, long)]
        file: PathBuf,

        /// The file already holds a nested record
        #[arg(long)]
        nested: bool,

        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// MongoDB connection string
    #[arg(long, env = "HRDOC_MONGODB_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Database name
    #[arg(long = "db", env = "HRDOC_DB_NAME", default_value = DEFAULT_DB_NAME)]
    db_name: String,

    /// Collection name
    #[arg(long = "collection", env = "HRDOC_COLLECTION", default_value = DEFAULT_COLLECTION)]
    collection_name: String,

    /// Give up on server selection after this many seconds
    #[arg(long)]
    server_selection_timeout_secs: Option<u64>,
}

impl From<TargetArgs> for MongoConfig {
    fn from(args: TargetArgs) -> Self {
        MongoConfig {
            url: args.url,
            db_name: args.db_name,
            collection_name: args.collection_name,
            server_selection_timeout: args.server_selection_timeout_secs.map(Duration::from_secs),
            ..Default::default()
        }
    }
}

#[derive(Tabled)]
struct InsertResult {
    inserted_id: String,
    employee_id: String,
    namespace: String,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Example => {
            print_json(&sample_input())?;
        }

        Commands::Render { file } => {
            let record = input::load_flat(&file)?;
            print_json(&record)?;
        }

        Commands::Insert {
            file,
            nested,
            target,
        } => {
            let record = if nested {
                input::load_nested(&file)?
            } else {
                input::load_flat(&file)?
            };

            let config = MongoConfig::from(target);
            info!(
                db_name = %config.db_name,
                collection = %config.collection_name,
                "Connecting to MongoDB..."
            );

            let repo = Arc::new(
                MongoHrRecordRepository::connect(&config)
                    .await
                    .context("MongoDB connection setup failed")?,
            );
            let namespace = repo.namespace();
            let service = HrRecordService::new(repo);

            let id = service
                .insert(&record)
                .await
                .context("Failed to insert HR record")?;

            println!("{}", "✓ Record inserted successfully".green().bold());
            println!();

            let result = InsertResult {
                inserted_id: id.to_string(),
                employee_id: record.employee_id().to_string(),
                namespace,
            };
            println!("{}", Table::new(vec![result]));
        }
    }

    Ok(())
}
