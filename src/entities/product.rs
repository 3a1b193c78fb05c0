//! Product entity - A catalog item with a price, stock level and metadata.
//!
//! Every product belongs to exactly one manufacturer and at most one
//! category. A product owns zero or more discounts, images and reviews;
//! those rows are removed together with the product. Prices are stored as
//! exact decimals with two fractional digits.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the product
    pub name: String,
    /// Free-form description
    pub description: String,
    /// ID of the manufacturer (required)
    pub manufacturer_id: i64,
    /// ID of the category, if the product is categorized
    pub category_id: Option<i64>,
    /// List price, always non-negative
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    /// Units in stock, always non-negative
    pub stock_quantity: i32,
    /// Whether the product is offered for sale
    pub is_available: bool,
    /// Warranty period in months
    pub warranty_months: i32,
    /// When the product was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one manufacturer
    #[sea_orm(
        belongs_to = "super::manufacturer::Entity",
        from = "Column::ManufacturerId",
        to = "super::manufacturer::Column::Id"
    )]
    Manufacturer,
    /// Each product optionally belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// One product has many discounts
    #[sea_orm(has_many = "super::discount::Entity")]
    Discounts,
    /// One product has many images
    #[sea_orm(has_many = "super::product_image::Entity")]
    Images,
    /// One product has many reviews
    #[sea_orm(has_many = "super::product_review::Entity")]
    Reviews,
}

impl Related<super::manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manufacturer.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::discount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discounts.def()
    }
}

impl Related<super::product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::product_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
