//! `ProductImage` entity - Stored image records for catalog products.
//!
//! Only the metadata lives here; upload handling is outside this crate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product image database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_images")]
pub struct Model {
    /// Unique identifier for the image record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the product the image belongs to
    pub product_id: i64,
    /// Storage path of the image file
    pub path: String,
    /// Optional caption shown under the image
    pub caption: String,
    /// Whether this is the product's main image
    pub is_main: bool,
    /// When the image was uploaded
    pub uploaded_at: DateTimeUtc,
}

/// Defines relationships between `ProductImage` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each image belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
