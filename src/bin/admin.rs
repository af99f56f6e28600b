//! CLI administration tool for the catalog service.
//!
//! Inspects and prepares the product store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin catalog-admin -- db check
//!
//! # Apply migrations
//! cargo run --bin catalog-admin -- db migrate
//!
//! # List products, optionally filtered by name
//! cargo run --bin catalog-admin -- products --title widg
//!
//! # Catalog summary per category
//! cargo run --bin catalog-admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): PostgreSQL connection string, defaults to
//!   the service default

use catalog_service::config::{DEFAULT_DATABASE_URL, mask_connection_string};
use catalog_service::domain::repositories::ProductRepository;
use catalog_service::infrastructure::persistence::PgProductRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the catalog store.
#[derive(Parser)]
#[command(name = "catalog-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Case-insensitive substring of the product name
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Show catalog statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

/// One row of the per-category summary.
#[derive(sqlx::FromRow)]
struct CategorySummary {
    category: String,
    products: i64,
    units: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = PgPool::connect(&database_url).await.with_context(|| {
        format!(
            "Failed to connect to {}",
            mask_connection_string(&database_url)
        )
    })?;

    match cli.command {
        Commands::Products { title } => handle_products(&pool, title).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Prints products in creation order.
async fn handle_products(pool: &PgPool, title: Option<String>) -> Result<()> {
    let repo = PgProductRepository::new(Arc::new(pool.clone()));

    let products = repo
        .list(title.filter(|t| !t.is_empty()))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list products: {}", e))?;

    if products.is_empty() {
        println!("{}", "  No products found".yellow());
        return Ok(());
    }

    println!(
        "  {:<24} {:<28} {:<16} {:>10} {:>8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Category".bright_white().bold(),
        "Price".bright_white().bold(),
        "Qty".bright_white().bold()
    );
    println!("  {}", "-".repeat(90).bright_black());

    for product in &products {
        println!(
            "  {:<24} {:<28} {:<16} {:>10.2} {:>8}",
            product.id.as_str().bright_black(),
            product.name.cyan(),
            product.category,
            product.price,
            product.quantity
        );
    }

    println!();
    println!(
        "  Total: {}",
        products.len().to_string().bright_white().bold()
    );

    Ok(())
}

/// Displays catalog statistics: product count plus per-category stock.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Catalog statistics".bright_blue().bold());
    println!();

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    let categories = sqlx::query_as::<_, CategorySummary>(
        r#"
        SELECT category, COUNT(*) AS products, COALESCE(SUM(quantity), 0) AS units
        FROM products
        GROUP BY category
        ORDER BY category
        "#,
    )
    .fetch_all(pool)
    .await?;

    println!(
        "  Products:   {}",
        total.to_string().bright_green().bold()
    );
    println!(
        "  Categories: {}",
        categories.len().to_string().bright_green().bold()
    );
    println!();

    for row in &categories {
        println!(
            "  {:<24} {:>6} products {:>10} units",
            row.category.cyan(),
            row.products,
            row.units
        );
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
