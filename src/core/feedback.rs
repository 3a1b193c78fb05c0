//! Feedback inbox business logic.

use crate::{
    entities::{Feedback, feedback},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Stores a message submitted through the contact form.
///
/// # Errors
/// Returns [`Error::Validation`] when any of the fields is blank or the
/// email is malformed, or a database error on insert.
pub async fn submit_feedback(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
    now: DateTime<Utc>,
) -> Result<feedback::Model> {
    for (field, value) in [
        ("name", name),
        ("subject", subject),
        ("message", message),
    ] {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field,
                message: format!("{field} cannot be empty"),
            });
        }
    }
    if !email.contains('@') {
        return Err(Error::Validation {
            field: "email",
            message: format!("not a usable email address: {email:?}"),
        });
    }

    let feedback = feedback::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email.trim().to_string()),
        subject: Set(subject.trim().to_string()),
        message: Set(message.to_string()),
        created_at: Set(now),
        is_processed: Set(false),
        ..Default::default()
    };
    feedback.insert(db).await.map_err(Into::into)
}

/// Marks a feedback message as handled by an operator.
///
/// # Errors
/// Returns [`Error::Validation`] when the id does not exist, or a database
/// error on update.
pub async fn mark_processed(db: &DatabaseConnection, feedback_id: i64) -> Result<feedback::Model> {
    let mut feedback: feedback::ActiveModel = Feedback::find_by_id(feedback_id)
        .one(db)
        .await?
        .ok_or(Error::Validation {
            field: "id",
            message: format!("no feedback message with id {feedback_id}"),
        })?
        .into();

    feedback.is_processed = Set(true);
    feedback.update(db).await.map_err(Into::into)
}

/// Lists messages still waiting for an operator, oldest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn unprocessed_feedback(db: &DatabaseConnection) -> Result<Vec<feedback::Model>> {
    Feedback::find()
        .filter(feedback::Column::IsProcessed.eq(false))
        .order_by_asc(feedback::Column::CreatedAt)
        .order_by_asc(feedback::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
