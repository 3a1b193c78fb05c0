//! Lecture business logic.

use crate::{
    entities::{Lecture, lecture},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new lecture announcement.
///
/// # Errors
/// Returns [`Error::Validation`] when the title is empty, or a database
/// error on insert.
pub async fn create_lecture(
    db: &DatabaseConnection,
    title: String,
    description: String,
    now: DateTime<Utc>,
) -> Result<lecture::Model> {
    if title.trim().is_empty() {
        return Err(Error::Validation {
            field: "title",
            message: "lecture title cannot be empty".to_string(),
        });
    }

    let lecture = lecture::ActiveModel {
        title: Set(title.trim().to_string()),
        description: Set(description),
        created_at: Set(now),
        ..Default::default()
    };
    lecture.insert(db).await.map_err(Into::into)
}

/// Retrieves a lecture by id, failing when it does not exist.
///
/// # Errors
/// Returns [`Error::LectureNotFound`] when the id does not exist, or a
/// database error on lookup.
pub async fn get_lecture(db: &DatabaseConnection, lecture_id: i64) -> Result<lecture::Model> {
    Lecture::find_by_id(lecture_id)
        .one(db)
        .await?
        .ok_or(Error::LectureNotFound { id: lecture_id })
}

/// Lists all lectures, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_lectures(db: &DatabaseConnection) -> Result<Vec<lecture::Model>> {
    Lecture::find()
        .order_by_desc(lecture::Column::CreatedAt)
        .order_by_desc(lecture::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
