//! Product business logic - the catalog's product write and read path.
//!
//! Provides functions for creating, retrieving, updating and deleting
//! products, plus filtered listings for the presentation layer. All
//! functions are async and return Result types for error handling.

use crate::{
    entities::{Discount, Product, ProductImage, ProductReview, discount, product},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Optional criteria for [`list_products`]. The default matches everything.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Only products of this manufacturer
    pub manufacturer_id: Option<i64>,
    /// Only products in this category
    pub category_id: Option<i64>,
    /// Only products currently offered for sale
    pub available_only: bool,
    /// Case-insensitive name substring
    pub name_contains: Option<String>,
}

/// Checks the write-time invariants shared by create and update.
fn validate_product_fields(name: &str, price: Decimal, stock_quantity: i32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "product name cannot be empty".to_string(),
        });
    }

    if price < Decimal::ZERO {
        return Err(Error::Validation {
            field: "price",
            message: format!("price cannot be negative, got {price}"),
        });
    }

    if stock_quantity < 0 {
        return Err(Error::Validation {
            field: "stock_quantity",
            message: format!("stock quantity cannot be negative, got {stock_quantity}"),
        });
    }

    Ok(())
}

/// Creates a new product after validating its fields.
///
/// The product starts out available for sale.
///
/// # Errors
/// Returns [`Error::Validation`] when the name is empty, the price is
/// negative or the stock quantity is negative, or a database error on
/// insert.
#[allow(clippy::too_many_arguments)]
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    description: String,
    manufacturer_id: i64,
    category_id: Option<i64>,
    price: Decimal,
    stock_quantity: i32,
    warranty_months: i32,
    now: DateTime<Utc>,
) -> Result<product::Model> {
    validate_product_fields(&name, price, stock_quantity)?;

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        manufacturer_id: Set(manufacturer_id),
        category_id: Set(category_id),
        price: Set(price),
        stock_quantity: Set(stock_quantity),
        is_available: Set(true),
        warranty_months: Set(warranty_months),
        created_at: Set(now),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Updates an existing product's editable fields.
///
/// # Errors
/// Returns [`Error::Validation`] on invariant violations,
/// [`Error::ProductNotFound`] when the id does not exist, or a database
/// error on update.
#[allow(clippy::too_many_arguments)]
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    name: String,
    description: String,
    price: Decimal,
    stock_quantity: i32,
    is_available: bool,
    warranty_months: i32,
) -> Result<product::Model> {
    validate_product_fields(&name, price, stock_quantity)?;

    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?
        .into();

    product.name = Set(name.trim().to_string());
    product.description = Set(description);
    product.price = Set(price);
    product.stock_quantity = Set(stock_quantity);
    product.is_available = Set(is_available);
    product.warranty_months = Set(warranty_months);

    product.update(db).await.map_err(Into::into)
}

/// Retrieves a product by id, failing when it does not exist.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] when the id does not exist, or a
/// database error on lookup.
pub async fn get_product(db: &DatabaseConnection, product_id: i64) -> Result<product::Model> {
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })
}

/// Retrieves a product by id, returning None when it does not exist.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn find_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists products matching `filter`, newest first.
///
/// The name filter uses a `LIKE` substring match, which is
/// case-insensitive for ASCII on SQLite.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_products(
    db: &DatabaseConnection,
    filter: &ProductFilter,
) -> Result<Vec<product::Model>> {
    let mut query = Product::find();

    if let Some(manufacturer_id) = filter.manufacturer_id {
        query = query.filter(product::Column::ManufacturerId.eq(manufacturer_id));
    }
    if let Some(category_id) = filter.category_id {
        query = query.filter(product::Column::CategoryId.eq(category_id));
    }
    if filter.available_only {
        query = query.filter(product::Column::IsAvailable.eq(true));
    }
    if let Some(needle) = &filter.name_contains {
        query = query.filter(product::Column::Name.contains(needle));
    }

    query
        .order_by_desc(product::Column::CreatedAt)
        .order_by_desc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a product together with its discounts, images and reviews.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] when the id does not exist, or a
/// database error during deletion.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let product = get_product(db, product_id).await?;

    // Owned rows go first so no orphans remain if FK enforcement is off
    Discount::delete_many()
        .filter(discount::Column::ProductId.eq(product.id))
        .exec(db)
        .await?;
    ProductImage::delete_many()
        .filter(crate::entities::product_image::Column::ProductId.eq(product.id))
        .exec(db)
        .await?;
    ProductReview::delete_many()
        .filter(crate::entities::product_review::Column::ProductId.eq(product.id))
        .exec(db)
        .await?;

    product::ActiveModel::from(product).delete(db).await?;
    Ok(())
}
