//! Bulk administration actions over selected products.
//!
//! Every action iterates the selected ids and performs one independent
//! write per product. A failure on one product is recorded in the outcome
//! and never rolls back or aborts the rest of the batch; the aggregate
//! count feeds the operator's feedback message.

use crate::{
    core::{discount, pricing, product},
    entities::{Discount, discount as discount_entity, product as product_entity},
    errors::{Error, Result},
};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::{Set, prelude::*};
use tracing::{info, warn};

/// Result of one bulk action: how many products were touched and which
/// ones failed, with the per-item reason.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Number of products successfully written
    pub affected: usize,
    /// Per-product failures, `(product_id, reason)`
    pub failures: Vec<(i64, String)>,
}

impl BatchOutcome {
    fn record(&mut self, product_id: i64, result: Result<()>) {
        match result {
            Ok(()) => self.affected += 1,
            Err(e) => {
                warn!("Bulk action failed for product {}: {}", product_id, e);
                self.failures.push((product_id, e.to_string()));
            }
        }
    }
}

/// Marks the selected products available or unavailable for sale.
///
/// # Errors
/// Never fails as a whole; per-product errors land in the outcome.
pub async fn set_availability(
    db: &DatabaseConnection,
    product_ids: &[i64],
    is_available: bool,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for &product_id in product_ids {
        let result = async {
            let mut model: product_entity::ActiveModel = product::get_product(db, product_id)
                .await?
                .into();
            model.is_available = Set(is_available);
            model.update(db).await?;
            Ok(())
        }
        .await;
        outcome.record(product_id, result);
    }
    info!(
        "Set availability={} on {} product(s), {} failure(s)",
        is_available,
        outcome.affected,
        outcome.failures.len()
    );
    outcome
}

/// Adjusts the selected products' prices by a percentage, e.g. `10` for a
/// 10% increase or `-10` for a 10% cut. Results are rounded to the cent.
///
/// # Errors
/// Returns [`Error::Validation`] when the percentage is -100 or lower
/// (which would zero or negate prices); per-product errors land in the
/// outcome.
pub async fn adjust_prices_by_percent(
    db: &DatabaseConnection,
    product_ids: &[i64],
    percent: i32,
) -> Result<BatchOutcome> {
    if percent <= -100 {
        return Err(Error::Validation {
            field: "percent",
            message: format!("price adjustment must be above -100, got {percent}"),
        });
    }

    let multiplier = Decimal::ONE + Decimal::from(percent) / Decimal::from(100);
    let mut outcome = BatchOutcome::default();
    for &product_id in product_ids {
        let result = async {
            let current = product::get_product(db, product_id).await?;
            let new_price = (current.price * multiplier)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let mut model: product_entity::ActiveModel = current.into();
            model.price = Set(new_price);
            model.update(db).await?;
            Ok(())
        }
        .await;
        outcome.record(product_id, result);
    }
    info!(
        "Adjusted prices by {}% on {} product(s), {} failure(s)",
        percent,
        outcome.affected,
        outcome.failures.len()
    );
    Ok(outcome)
}

/// Applies an N%-for-D-days discount to the selected products.
///
/// A product without a current discount gets a fresh one running from
/// `now` for `days`; a product that already has one gets that discount
/// rewritten to the new percent and window instead of stacking a second
/// row.
///
/// # Errors
/// Never fails as a whole; per-product errors (including validation of
/// the percent) land in the outcome.
pub async fn apply_discount(
    db: &DatabaseConnection,
    product_ids: &[i64],
    percent: i32,
    days: i64,
    now: DateTime<Utc>,
) -> BatchOutcome {
    let end = now + Duration::days(days);
    let mut outcome = BatchOutcome::default();
    for &product_id in product_ids {
        let result = async {
            let target = product::get_product(db, product_id).await?;
            match pricing::current_discount(db, &target, now).await? {
                Some(existing) => {
                    discount::update_discount(db, existing.id, percent, now, Some(end), true)
                        .await?;
                }
                None => {
                    discount::create_discount(
                        db,
                        product_id,
                        percent,
                        Some(now),
                        Some(end),
                        true,
                        now,
                    )
                    .await?;
                }
            }
            Ok(())
        }
        .await;
        outcome.record(product_id, result);
    }
    info!(
        "Applied {}% discount for {} day(s) to {} product(s), {} failure(s)",
        percent,
        days,
        outcome.affected,
        outcome.failures.len()
    );
    outcome
}

/// Deletes every discount of the selected products.
///
/// # Errors
/// Never fails as a whole; per-product errors land in the outcome.
pub async fn remove_all_discounts(db: &DatabaseConnection, product_ids: &[i64]) -> BatchOutcome {
    let mut deleted = 0;
    let mut outcome = BatchOutcome::default();
    for &product_id in product_ids {
        let result = async {
            product::get_product(db, product_id).await?;
            let removed = Discount::delete_many()
                .filter(discount_entity::Column::ProductId.eq(product_id))
                .exec(db)
                .await?;
            deleted += removed.rows_affected;
            Ok(())
        }
        .await;
        outcome.record(product_id, result);
    }
    info!(
        "Removed {} discount(s) from {} product(s), {} failure(s)",
        deleted,
        outcome.affected,
        outcome.failures.len()
    );
    outcome
}
