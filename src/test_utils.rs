//! Shared test utilities for the storefront crate.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    core::{discount, manufacturer, product},
    entities,
    errors::Result,
};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test manufacturer with sensible defaults.
///
/// # Defaults
/// * `country`: "Denmark"
/// * no website, no founded year
pub async fn create_test_manufacturer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::manufacturer::Model> {
    manufacturer::create_manufacturer(db, name.to_string(), "Denmark".to_string(), None, None).await
}

/// Creates a test category with an empty description.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    crate::core::category::create_category(db, name.to_string(), String::new()).await
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `price`: 100.00
/// * `stock_quantity`: 10
/// * `warranty_months`: 12
/// * no category
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    manufacturer_id: i64,
) -> Result<entities::product::Model> {
    create_custom_product(db, name, Decimal::new(10000, 2), manufacturer_id).await
}

/// Creates a test product with a custom price.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: Decimal,
    manufacturer_id: i64,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        name.to_string(),
        "Test product".to_string(),
        manufacturer_id,
        None,
        price,
        10,
        12,
        Utc::now(),
    )
    .await
}

/// Creates a test discount running from one hour before `now` until 30
/// days after it.
pub async fn create_test_discount(
    db: &DatabaseConnection,
    product_id: i64,
    percent: i32,
    now: DateTime<Utc>,
) -> Result<entities::discount::Model> {
    create_custom_discount(
        db,
        product_id,
        percent,
        now - Duration::hours(1),
        Some(now + Duration::days(30)),
        true,
        now,
    )
    .await
}

/// Creates a test discount with a custom window and active flag.
pub async fn create_custom_discount(
    db: &DatabaseConnection,
    product_id: i64,
    percent: i32,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    is_active: bool,
    now: DateTime<Utc>,
) -> Result<entities::discount::Model> {
    discount::create_discount(
        db,
        product_id,
        percent,
        Some(start_date),
        end_date,
        is_active,
        now,
    )
    .await
}

/// Sets up a complete test environment with a manufacturer.
/// Returns (db, manufacturer) for common test scenarios.
pub async fn setup_with_manufacturer()
-> Result<(DatabaseConnection, entities::manufacturer::Model)> {
    let db = setup_test_db().await?;
    let manufacturer = create_test_manufacturer(&db, "Test Manufacturer").await?;
    Ok((db, manufacturer))
}

/// Sets up a complete test environment with manufacturer and product.
/// Returns (db, manufacturer, product) for product-related tests.
pub async fn setup_with_product() -> Result<(
    DatabaseConnection,
    entities::manufacturer::Model,
    entities::product::Model,
)> {
    let db = setup_test_db().await?;
    let manufacturer = create_test_manufacturer(&db, "Test Manufacturer").await?;
    let product = create_test_product(&db, "Test Product", manufacturer.id).await?;
    Ok((db, manufacturer, product))
}
