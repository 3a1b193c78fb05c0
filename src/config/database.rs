//! Database configuration module for the storefront.
//!
//! Handles `SQLite` connection setup and table creation using `SeaORM`.
//! Tables are generated straight from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the
//! Rust structs without hand-written SQL.

use crate::entities::{
    Category, Discount, Feedback, Lecture, Manufacturer, Product, ProductImage, ProductReview,
    Project, Subscriber,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default
/// local `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/storefront.sqlite".to_string())
}

/// Establishes a connection using `DATABASE_URL`, falling back to the
/// default local `SQLite` file.
///
/// # Errors
/// Returns an error when the connection cannot be established.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions. Safe to call on a
/// database that already has them.
///
/// # Errors
/// Returns an error when a create-table statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(Manufacturer),
        schema.create_table_from_entity(Category),
        schema.create_table_from_entity(Product),
        schema.create_table_from_entity(Discount),
        schema.create_table_from_entity(ProductImage),
        schema.create_table_from_entity(ProductReview),
        schema.create_table_from_entity(Subscriber),
        schema.create_table_from_entity(Feedback),
        schema.create_table_from_entity(Project),
        schema.create_table_from_entity(Lecture),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(statement)).await?;
    }

    Ok(())
}
