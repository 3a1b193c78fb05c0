//! Portfolio project business logic.

use crate::{
    entities::{Project, project},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new portfolio project.
///
/// # Errors
/// Returns [`Error::Validation`] when the title is empty, or a database
/// error on insert.
pub async fn create_project(
    db: &DatabaseConnection,
    title: String,
    description: String,
    now: DateTime<Utc>,
) -> Result<project::Model> {
    if title.trim().is_empty() {
        return Err(Error::Validation {
            field: "title",
            message: "project title cannot be empty".to_string(),
        });
    }

    let project = project::ActiveModel {
        title: Set(title.trim().to_string()),
        description: Set(description),
        created_at: Set(now),
        ..Default::default()
    };
    project.insert(db).await.map_err(Into::into)
}

/// Retrieves a project by id, failing when it does not exist.
///
/// # Errors
/// Returns [`Error::ProjectNotFound`] when the id does not exist, or a
/// database error on lookup.
pub async fn get_project(db: &DatabaseConnection, project_id: i64) -> Result<project::Model> {
    Project::find_by_id(project_id)
        .one(db)
        .await?
        .ok_or(Error::ProjectNotFound { id: project_id })
}

/// Lists all projects, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_projects(db: &DatabaseConnection) -> Result<Vec<project::Model>> {
    Project::find()
        .order_by_desc(project::Column::CreatedAt)
        .order_by_desc(project::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
