//! Discount business logic - validity rules and the discount write path.
//!
//! The validity predicate and the price calculation are pure functions of a
//! discount record and an injected instant, so callers (and tests) control
//! the clock. Write operations validate the percent range and the date
//! window before touching the database; violations surface as
//! [`Error::Validation`] and are recoverable per record.

use crate::{
    entities::{Discount, discount},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Returns true when `discount` applies at the instant `now`.
///
/// A discount applies when its `is_active` flag is set, its start date is
/// not in the future, and its end date (when present) has not passed.
/// Open-ended discounts stay valid until deactivated.
#[must_use]
pub fn is_valid(discount: &discount::Model, now: DateTime<Utc>) -> bool {
    if !discount.is_active {
        return false;
    }

    if now < discount.start_date {
        return false;
    }

    if let Some(end_date) = discount.end_date {
        if now > end_date {
            return false;
        }
    }

    true
}

/// Calculates the price after applying `discount` to `original_price`.
///
/// Returns `original_price` unchanged when the discount does not apply at
/// `now`; callers are expected to pass only valid discounts, but the
/// function is safe on expired or inactive ones. The arithmetic is exact
/// decimal: an integer percent divided by 100 has no representation error,
/// so `200.00` at 15% yields exactly `170.00`.
#[must_use]
pub fn calculate_discounted_price(
    discount: &discount::Model,
    original_price: Decimal,
    now: DateTime<Utc>,
) -> Decimal {
    if !is_valid(discount, now) {
        return original_price;
    }

    let fraction = Decimal::from(discount.discount_percent) / Decimal::from(100);
    original_price - original_price * fraction
}

/// Checks the write-time invariants shared by create and update.
fn validate_discount_fields(
    percent: i32,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
) -> Result<()> {
    if !(1..=100).contains(&percent) {
        return Err(Error::Validation {
            field: "discount_percent",
            message: format!("discount percent must be between 1 and 100, got {percent}"),
        });
    }

    if let Some(end) = end_date {
        if end <= start_date {
            return Err(Error::Validation {
                field: "end_date",
                message: "end date must be after start date".to_string(),
            });
        }
    }

    Ok(())
}

/// Creates a new discount for a product after validating its fields.
///
/// `start_date` defaults to `now` when not given; a missing `end_date`
/// makes the discount open-ended.
///
/// # Errors
/// Returns [`Error::Validation`] when the percent is outside 1..=100 or the
/// end date is not after the start date, or a database error on insert.
pub async fn create_discount(
    db: &DatabaseConnection,
    product_id: i64,
    discount_percent: i32,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    is_active: bool,
    now: DateTime<Utc>,
) -> Result<discount::Model> {
    let start_date = start_date.unwrap_or(now);
    validate_discount_fields(discount_percent, start_date, end_date)?;

    let discount = discount::ActiveModel {
        product_id: Set(product_id),
        discount_percent: Set(discount_percent),
        start_date: Set(start_date),
        end_date: Set(end_date),
        is_active: Set(is_active),
        created_at: Set(now),
        ..Default::default()
    };
    discount.insert(db).await.map_err(Into::into)
}

/// Updates an existing discount's percent, window and active flag.
///
/// # Errors
/// Returns [`Error::Validation`] on invariant violations,
/// [`Error::DiscountNotFound`] when the id does not exist, or a database
/// error on update.
pub async fn update_discount(
    db: &DatabaseConnection,
    discount_id: i64,
    discount_percent: i32,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    is_active: bool,
) -> Result<discount::Model> {
    validate_discount_fields(discount_percent, start_date, end_date)?;

    let mut discount: discount::ActiveModel = Discount::find_by_id(discount_id)
        .one(db)
        .await?
        .ok_or(Error::DiscountNotFound { id: discount_id })?
        .into();

    discount.discount_percent = Set(discount_percent);
    discount.start_date = Set(start_date);
    discount.end_date = Set(end_date);
    discount.is_active = Set(is_active);

    discount.update(db).await.map_err(Into::into)
}

/// Flips a discount's active flag without touching its window.
///
/// # Errors
/// Returns [`Error::DiscountNotFound`] when the id does not exist, or a
/// database error on update.
pub async fn set_discount_active(
    db: &DatabaseConnection,
    discount_id: i64,
    is_active: bool,
) -> Result<discount::Model> {
    let mut discount: discount::ActiveModel = Discount::find_by_id(discount_id)
        .one(db)
        .await?
        .ok_or(Error::DiscountNotFound { id: discount_id })?
        .into();

    discount.is_active = Set(is_active);
    discount.update(db).await.map_err(Into::into)
}

/// Lists all discounts of one product, newest window first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_discounts_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<discount::Model>> {
    Discount::find()
        .filter(discount::Column::ProductId.eq(product_id))
        .order_by_desc(discount::Column::StartDate)
        .order_by_desc(discount::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn discount_record(
        percent: i32,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        is_active: bool,
    ) -> discount::Model {
        discount::Model {
            id: 1,
            product_id: 1,
            discount_percent: percent,
            start_date: start,
            end_date: end,
            is_active,
            created_at: start,
        }
    }

    #[test]
    fn test_is_valid_inactive_discount_never_applies() {
        let now = Utc::now();
        // Dates are wide open; the flag alone must veto the discount
        let d = discount_record(15, now - Duration::days(1), None, false);
        assert!(!is_valid(&d, now));
    }

    #[test]
    fn test_is_valid_within_window() {
        let now = Utc::now();
        let d = discount_record(
            15,
            now - Duration::hours(1),
            Some(now + Duration::days(29)),
            true,
        );
        assert!(is_valid(&d, now));
    }

    #[test]
    fn test_is_valid_open_ended() {
        let now = Utc::now();
        let d = discount_record(15, now - Duration::days(365), None, true);
        assert!(is_valid(&d, now));
    }

    #[test]
    fn test_is_valid_not_started_yet() {
        let now = Utc::now();
        let d = discount_record(15, now + Duration::hours(1), None, true);
        assert!(!is_valid(&d, now));
    }

    #[test]
    fn test_is_valid_expired() {
        let now = Utc::now();
        let d = discount_record(
            15,
            now - Duration::days(31),
            Some(now - Duration::days(1)),
            true,
        );
        assert!(!is_valid(&d, now));
    }

    #[test]
    fn test_is_valid_at_window_edges() {
        let now = Utc::now();
        // Inclusive on both ends
        let starts_now = discount_record(15, now, Some(now + Duration::days(1)), true);
        assert!(is_valid(&starts_now, now));

        let ends_now = discount_record(15, now - Duration::days(1), Some(now), true);
        assert!(is_valid(&ends_now, now));
    }

    #[test]
    fn test_calculate_discounted_price_exact() {
        let now = Utc::now();
        let d = discount_record(15, now - Duration::hours(1), None, true);
        assert_eq!(
            calculate_discounted_price(&d, dec!(200.00), now),
            dec!(170.00)
        );
        assert_eq!(
            calculate_discounted_price(&d, dec!(1000.00), now),
            dec!(850.00)
        );
    }

    #[test]
    fn test_calculate_discounted_price_full_markdown() {
        let now = Utc::now();
        let d = discount_record(100, now - Duration::hours(1), None, true);
        assert_eq!(calculate_discounted_price(&d, dec!(49.99), now), dec!(0.00));
    }

    #[test]
    fn test_calculate_discounted_price_invalid_returns_original() {
        let now = Utc::now();
        let expired = discount_record(
            50,
            now - Duration::days(10),
            Some(now - Duration::days(5)),
            true,
        );
        assert_eq!(
            calculate_discounted_price(&expired, dec!(100.00), now),
            dec!(100.00)
        );

        let inactive = discount_record(50, now - Duration::days(1), None, false);
        assert_eq!(
            calculate_discounted_price(&inactive, dec!(100.00), now),
            dec!(100.00)
        );
    }

    #[tokio::test]
    async fn test_create_discount_validation() -> Result<()> {
        let db = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Sqlite).into_connection();
        let now = Utc::now();

        // Percent below range
        let result = create_discount(&db, 1, 0, None, None, true, now).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation {
                field: "discount_percent",
                ..
            }
        ));

        // Percent above range
        let result = create_discount(&db, 1, 101, None, None, true, now).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation {
                field: "discount_percent",
                ..
            }
        ));

        // End date equal to start date
        let result = create_discount(&db, 1, 15, Some(now), Some(now), true, now).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation {
                field: "end_date",
                ..
            }
        ));

        // End date before start date
        let result =
            create_discount(&db, 1, 15, Some(now), Some(now - Duration::days(1)), true, now).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation {
                field: "end_date",
                ..
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_discount_one_second_window_succeeds() -> Result<()> {
        let (db, _manufacturer, product) = setup_with_product().await?;
        let now = Utc::now();

        let discount = create_discount(
            &db,
            product.id,
            15,
            Some(now),
            Some(now + Duration::seconds(1)),
            true,
            now,
        )
        .await?;

        assert_eq!(discount.discount_percent, 15);
        assert_eq!(discount.end_date, Some(now + Duration::seconds(1)));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_discount_defaults_start_to_now() -> Result<()> {
        let (db, _manufacturer, product) = setup_with_product().await?;
        let now = Utc::now();

        let discount = create_discount(&db, product.id, 20, None, None, true, now).await?;

        assert_eq!(discount.start_date, now);
        assert_eq!(discount.end_date, None);
        assert!(discount.is_active);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_discount_integration() -> Result<()> {
        let (db, _manufacturer, product) = setup_with_product().await?;
        let now = Utc::now();
        let discount = create_test_discount(&db, product.id, 10, now).await?;

        let updated = update_discount(
            &db,
            discount.id,
            25,
            now,
            Some(now + Duration::days(7)),
            true,
        )
        .await?;

        assert_eq!(updated.id, discount.id);
        assert_eq!(updated.discount_percent, 25);
        assert_eq!(updated.end_date, Some(now + Duration::days(7)));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_discount_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let now = Utc::now();

        let result = update_discount(&db, 999, 15, now, None, true).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::DiscountNotFound { id: 999 }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_discount_active() -> Result<()> {
        let (db, _manufacturer, product) = setup_with_product().await?;
        let now = Utc::now();
        let discount = create_test_discount(&db, product.id, 10, now).await?;

        let deactivated = set_discount_active(&db, discount.id, false).await?;
        assert!(!deactivated.is_active);
        assert!(!is_valid(&deactivated, now));

        let reactivated = set_discount_active(&db, discount.id, true).await?;
        assert!(reactivated.is_active);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_discounts_for_product() -> Result<()> {
        let (db, _manufacturer, product) = setup_with_product().await?;
        let now = Utc::now();

        let older = create_custom_discount(
            &db,
            product.id,
            10,
            now - Duration::days(2),
            None,
            true,
            now,
        )
        .await?;
        let newer = create_custom_discount(
            &db,
            product.id,
            20,
            now - Duration::days(1),
            None,
            true,
            now,
        )
        .await?;

        let discounts = list_discounts_for_product(&db, product.id).await?;
        assert_eq!(discounts.len(), 2);
        // Newest window first
        assert_eq!(discounts[0].id, newer.id);
        assert_eq!(discounts[1].id, older.id);
        Ok(())
    }
}
