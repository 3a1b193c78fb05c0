//! Newsletter subscription business logic.
//!
//! Subscriptions are never deleted: unsubscribing deactivates the row and
//! a returning address is reactivated in place, keeping the email column
//! unique.

use crate::{
    entities::{Subscriber, subscriber},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::Expr};

/// Subscribes an email address to the newsletter.
///
/// A previously unsubscribed address is reactivated; an address with an
/// active subscription is rejected.
///
/// # Errors
/// Returns [`Error::Validation`] when the email is blank,
/// [`Error::AlreadySubscribed`] on a duplicate active subscription, or a
/// database error.
pub async fn subscribe(
    db: &DatabaseConnection,
    email: &str,
    now: DateTime<Utc>,
) -> Result<subscriber::Model> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(Error::Validation {
            field: "email",
            message: format!("not a usable email address: {email:?}"),
        });
    }

    let existing = Subscriber::find()
        .filter(subscriber::Column::Email.eq(email))
        .one(db)
        .await?;

    match existing {
        Some(subscriber) if subscriber.is_active => Err(Error::AlreadySubscribed {
            email: email.to_string(),
        }),
        Some(subscriber) => {
            let mut reactivate: subscriber::ActiveModel = subscriber.into();
            reactivate.is_active = Set(true);
            reactivate.update(db).await.map_err(Into::into)
        }
        None => {
            let subscriber = subscriber::ActiveModel {
                email: Set(email.to_string()),
                date_subscribed: Set(now),
                is_active: Set(true),
                ..Default::default()
            };
            subscriber.insert(db).await.map_err(Into::into)
        }
    }
}

/// Deactivates the subscription of `email`, if one exists.
///
/// Returns the updated row, or None when the address was never subscribed.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn unsubscribe(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<subscriber::Model>> {
    let existing = Subscriber::find()
        .filter(subscriber::Column::Email.eq(email.trim()))
        .one(db)
        .await?;

    match existing {
        Some(subscriber) => {
            let mut deactivate: subscriber::ActiveModel = subscriber.into();
            deactivate.is_active = Set(false);
            deactivate.update(db).await.map(Some).map_err(Into::into)
        }
        None => Ok(None),
    }
}

/// Lists active subscribers, most recent subscription first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn active_subscribers(db: &DatabaseConnection) -> Result<Vec<subscriber::Model>> {
    Subscriber::find()
        .filter(subscriber::Column::IsActive.eq(true))
        .order_by_desc(subscriber::Column::DateSubscribed)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Bulk-activates or deactivates the given subscriptions, returning the
/// number of rows touched. Used by the admin list actions.
///
/// # Errors
/// Returns an error if the database update fails.
pub async fn set_subscriptions_active(
    db: &DatabaseConnection,
    subscriber_ids: &[i64],
    is_active: bool,
) -> Result<u64> {
    let result = Subscriber::update_many()
        .col_expr(subscriber::Column::IsActive, Expr::value(is_active))
        .filter(subscriber::Column::Id.is_in(subscriber_ids.to_vec()))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Whole days since the subscription was created; admin list display.
#[must_use]
pub fn days_subscribed(subscriber: &subscriber::Model, now: DateTime<Utc>) -> i64 {
    (now - subscriber.date_subscribed).num_days()
}
