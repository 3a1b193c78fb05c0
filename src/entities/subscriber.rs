//! Subscriber entity - A newsletter subscription record.
//!
//! Email addresses are unique; unsubscribing flips `is_active` instead of
//! deleting the row, so a returning subscriber is simply reactivated.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subscriber database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscribers")]
pub struct Model {
    /// Unique identifier for the subscriber
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Subscriber email address, unique across the table
    #[sea_orm(unique)]
    pub email: String,
    /// When the subscription was first created
    pub date_subscribed: DateTimeUtc,
    /// Whether the subscription is currently active
    pub is_active: bool,
}

/// Defines relationships between Subscriber and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
