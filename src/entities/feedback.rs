//! Feedback entity - A message from the site's contact form.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Feedback database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    /// Unique identifier for the feedback message
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the sender
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message subject line
    pub subject: String,
    /// Message body
    pub message: String,
    /// When the message was submitted
    pub created_at: DateTimeUtc,
    /// Whether an operator has handled the message
    pub is_processed: bool,
}

/// Defines relationships between Feedback and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
