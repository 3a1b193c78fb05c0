//! Manufacturer entity - Represents a product manufacturer.
//!
//! Manufacturers are referenced by products and are protected against
//! deletion while any product still points at them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Manufacturer database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "manufacturers")]
pub struct Model {
    /// Unique identifier for the manufacturer
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Company name
    pub name: String,
    /// Country of origin
    pub country: String,
    /// Company website, if any
    pub website: Option<String>,
    /// Year the company was founded, if known
    pub founded_year: Option<i32>,
    /// Whether the manufacturer is currently active in the catalog
    pub is_active: bool,
}

/// Defines relationships between Manufacturer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One manufacturer has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
