//! Product review business logic.

use crate::{
    entities::{ProductReview, product_review},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Adds a review to a product.
///
/// New reviews are published immediately; moderation unpublishes them.
///
/// # Errors
/// Returns [`Error::Validation`] when the rating falls outside 1..=5 or
/// the author name is empty, or a database error on insert.
pub async fn add_review(
    db: &DatabaseConnection,
    product_id: i64,
    author: String,
    email: Option<String>,
    rating: i32,
    comment: String,
    now: DateTime<Utc>,
) -> Result<product_review::Model> {
    if author.trim().is_empty() {
        return Err(Error::Validation {
            field: "author",
            message: "review author cannot be empty".to_string(),
        });
    }

    if !(1..=5).contains(&rating) {
        return Err(Error::Validation {
            field: "rating",
            message: format!("rating must be between 1 and 5, got {rating}"),
        });
    }

    let review = product_review::ActiveModel {
        product_id: Set(product_id),
        author: Set(author.trim().to_string()),
        email: Set(email),
        rating: Set(rating),
        comment: Set(comment),
        created_at: Set(now),
        is_published: Set(true),
        ..Default::default()
    };
    review.insert(db).await.map_err(Into::into)
}

/// Lists a product's published reviews, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn published_reviews(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<product_review::Model>> {
    ProductReview::find()
        .filter(product_review::Column::ProductId.eq(product_id))
        .filter(product_review::Column::IsPublished.eq(true))
        .order_by_desc(product_review::Column::CreatedAt)
        .order_by_desc(product_review::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Averages a slice of star ratings, `None` when the slice is empty.
///
/// A pure fold over the ratings the caller already fetched; it performs no
/// queries of its own.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_rating(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    Some(sum as f64 / ratings.len() as f64)
}
