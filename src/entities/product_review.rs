//! `ProductReview` entity - Customer reviews with a 1-5 star rating.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product review database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_reviews")]
pub struct Model {
    /// Unique identifier for the review
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the reviewed product
    pub product_id: i64,
    /// Display name of the reviewer
    pub author: String,
    /// Reviewer email, if provided
    pub email: Option<String>,
    /// Star rating, 1..=5
    pub rating: i32,
    /// Review text
    pub comment: String,
    /// When the review was submitted
    pub created_at: DateTimeUtc,
    /// Whether the review is visible on the site
    pub is_published: bool,
}

/// Defines relationships between `ProductReview` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each review belongs to one product
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
