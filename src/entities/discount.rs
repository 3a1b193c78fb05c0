//! Discount entity - A time-bounded percentage markdown on one product.
//!
//! A discount applies between `start_date` and `end_date` (a missing
//! `end_date` means open-ended) while `is_active` is set. Write-time
//! validation keeps `discount_percent` in 1..=100 and `end_date` strictly
//! after `start_date`; see `core::discount`. Expired discounts become
//! logically inert without being deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Discount database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discounts")]
pub struct Model {
    /// Unique identifier for the discount
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the product this discount belongs to
    pub product_id: i64,
    /// Percentage taken off the list price, 1..=100
    pub discount_percent: i32,
    /// When the discount starts applying
    pub start_date: DateTimeUtc,
    /// When the discount stops applying; None means open-ended
    pub end_date: Option<DateTimeUtc>,
    /// Operator kill switch; an inactive discount never applies
    pub is_active: bool,
    /// When the discount record was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Discount and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each discount belongs to one product
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
