//! CLI tool that loads customer records from a JSON file into the database.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin seed -- --file data/data.json
//! ```
//!
//! # File Format
//!
//! ```json
//! {
//!   "customers": [
//!     { "firstname": "Ada", "lastname": "Lovelace", "age": 36 }
//!   ]
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite connection string, same default as
//!   the server (`sqlite://data/data.db`)

use customer_api::domain::entities::NewCustomer;
use customer_api::domain::repositories::CustomerRepository;
use customer_api::infrastructure::persistence::SqliteCustomerRepository;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Seeds the customers table from a JSON file.
#[derive(Parser)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON file to load
    #[arg(short, long, default_value = "data/data.json")]
    file: PathBuf,

    /// SQLite database URL (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[derive(Deserialize)]
struct SeedFile {
    customers: Vec<SeedCustomer>,
}

#[derive(Deserialize)]
struct SeedCustomer {
    firstname: String,
    lastname: String,
    age: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite://data/data.db".to_string());

    let raw = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let seed: SeedFile =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", cli.file.display()))?;

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    SqliteCustomerRepository::ensure_schema(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create schema: {:?}", e))?;

    let repository = SqliteCustomerRepository::new(Arc::new(pool));

    let mut inserted = 0usize;
    for row in seed.customers {
        let customer = repository
            .create(NewCustomer {
                firstname: row.firstname,
                lastname: row.lastname,
                age: row.age,
            })
            .await
            .map_err(|e| anyhow::anyhow!("Failed to insert customer: {:?}", e))?;
        println!("inserted customer {} ({})", customer.id, customer.full_name());
        inserted += 1;
    }

    println!("done: {} customer(s) inserted", inserted);

    Ok(())
}
