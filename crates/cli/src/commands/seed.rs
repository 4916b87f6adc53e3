//! Seed the database with demo posts and products.
//!
//! # Usage
//!
//! ```bash
//! minimart-cli seed
//! ```
//!
//! # Environment Variables
//!
//! - `MINIMART_DATABASE_URL` - `PostgreSQL` connection string
//!
//! Seeding is skipped if the catalog already has rows, so the command is
//! safe to re-run.

use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

const PRODUCTS: &[(&str, &str)] = &[
    ("Espresso Beans", "Dark roast, 500g bag"),
    ("Pour-Over Kettle", "Gooseneck kettle, 1l, matte black"),
    ("Ceramic Mug", "340ml, dishwasher safe"),
];

const POSTS: &[(&str, &str)] = &[
    (
        "Welcome to Minimart",
        "A small demo shop with a blog, a catalog, and one very tidy cart.",
    ),
    (
        "Brewing at home",
        "Three pieces of gear we reach for every morning.",
    ),
];

/// Seed demo data.
///
/// # Errors
///
/// Returns `SeedError` if the database URL is missing or an insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("MINIMART_DATABASE_URL")
        .map_err(|_| SeedError::MissingEnvVar("MINIMART_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    let (product_count,): (i64,) = sqlx::query_as("SELECT count(*) FROM products")
        .fetch_one(&pool)
        .await?;
    if product_count > 0 {
        tracing::info!(product_count, "Catalog already seeded, skipping");
        return Ok(());
    }

    for (name, description) in PRODUCTS {
        sqlx::query("INSERT INTO products (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(&pool)
            .await?;
    }

    for (title, body) in POSTS {
        sqlx::query("INSERT INTO posts (title, body) VALUES ($1, $2)")
            .bind(title)
            .bind(body)
            .execute(&pool)
            .await?;
    }

    tracing::info!(
        products = PRODUCTS.len(),
        posts = POSTS.len(),
        "Seed complete"
    );
    Ok(())
}
