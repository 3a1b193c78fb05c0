//! Project entity - A portfolio entry shown on the site.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    /// Unique identifier for the project
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project title
    pub title: String,
    /// Project description
    pub description: String,
    /// When the project was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Project and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
