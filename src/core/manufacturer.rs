//! Manufacturer business logic.
//!
//! Manufacturers are referenced by products, so deletion is refused while
//! any product still points at the row.

use crate::{
    entities::{Manufacturer, Product, manufacturer, product},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Creates a new manufacturer.
///
/// # Errors
/// Returns [`Error::Validation`] when the name is empty, or a database
/// error on insert.
pub async fn create_manufacturer(
    db: &DatabaseConnection,
    name: String,
    country: String,
    website: Option<String>,
    founded_year: Option<i32>,
) -> Result<manufacturer::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "manufacturer name cannot be empty".to_string(),
        });
    }

    let manufacturer = manufacturer::ActiveModel {
        name: Set(name.trim().to_string()),
        country: Set(country),
        website: Set(website),
        founded_year: Set(founded_year),
        is_active: Set(true),
        ..Default::default()
    };
    manufacturer.insert(db).await.map_err(Into::into)
}

/// Retrieves a manufacturer by id, failing when it does not exist.
///
/// # Errors
/// Returns [`Error::ManufacturerNotFound`] when the id does not exist, or
/// a database error on lookup.
pub async fn get_manufacturer(
    db: &DatabaseConnection,
    manufacturer_id: i64,
) -> Result<manufacturer::Model> {
    Manufacturer::find_by_id(manufacturer_id)
        .one(db)
        .await?
        .ok_or(Error::ManufacturerNotFound {
            id: manufacturer_id,
        })
}

/// Lists all manufacturers ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_manufacturers(db: &DatabaseConnection) -> Result<Vec<manufacturer::Model>> {
    Manufacturer::find()
        .order_by_asc(manufacturer::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists the manufacturers currently marked active, alphabetically.
///
/// Admin product forms offer only these as choices.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_active_manufacturers(
    db: &DatabaseConnection,
) -> Result<Vec<manufacturer::Model>> {
    Manufacturer::find()
        .filter(manufacturer::Column::IsActive.eq(true))
        .order_by_asc(manufacturer::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a manufacturer unless products still reference it.
///
/// # Errors
/// Returns [`Error::ReferencedByProducts`] while any product points at the
/// manufacturer, [`Error::ManufacturerNotFound`] when the id does not
/// exist, or a database error during deletion.
pub async fn delete_manufacturer(db: &DatabaseConnection, manufacturer_id: i64) -> Result<()> {
    let manufacturer = get_manufacturer(db, manufacturer_id).await?;

    let references = Product::find()
        .filter(product::Column::ManufacturerId.eq(manufacturer_id))
        .count(db)
        .await?;
    if references > 0 {
        return Err(Error::ReferencedByProducts {
            entity: "manufacturer",
            count: references,
        });
    }

    manufacturer::ActiveModel::from(manufacturer)
        .delete(db)
        .await?;
    Ok(())
}
