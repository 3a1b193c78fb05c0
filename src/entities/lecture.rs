//! Lecture entity - A lecture announcement with a short description.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lecture database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lectures")]
pub struct Model {
    /// Unique identifier for the lecture
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Lecture title
    pub title: String,
    /// Short description of the lecture
    pub description: String,
    /// When the lecture was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Lecture and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
