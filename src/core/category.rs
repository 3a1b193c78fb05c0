//! Category business logic.
//!
//! Same referential protection as manufacturers: a category cannot be
//! deleted while products reference it.

use crate::{
    entities::{Category, Product, category, product},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Creates a new category.
///
/// # Errors
/// Returns [`Error::Validation`] when the name is empty, or a database
/// error on insert.
pub async fn create_category(
    db: &DatabaseConnection,
    name: String,
    description: String,
) -> Result<category::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "category name cannot be empty".to_string(),
        });
    }

    let category = category::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        ..Default::default()
    };
    category.insert(db).await.map_err(Into::into)
}

/// Retrieves a category by id, failing when it does not exist.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] when the id does not exist, or a
/// database error on lookup.
pub async fn get_category(db: &DatabaseConnection, category_id: i64) -> Result<category::Model> {
    Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or(Error::CategoryNotFound { id: category_id })
}

/// Lists all categories ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a category unless products still reference it.
///
/// # Errors
/// Returns [`Error::ReferencedByProducts`] while any product points at the
/// category, [`Error::CategoryNotFound`] when the id does not exist, or a
/// database error during deletion.
pub async fn delete_category(db: &DatabaseConnection, category_id: i64) -> Result<()> {
    let category = get_category(db, category_id).await?;

    let references = Product::find()
        .filter(product::Column::CategoryId.eq(category_id))
        .count(db)
        .await?;
    if references > 0 {
        return Err(Error::ReferencedByProducts {
            entity: "category",
            count: references,
        });
    }

    category::ActiveModel::from(category).delete(db).await?;
    Ok(())
}
