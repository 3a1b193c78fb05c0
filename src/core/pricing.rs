//! Pricing engine - resolves the current discount of a product and computes
//! its effective price.
//!
//! At most one discount is authoritative for a product at a given instant.
//! When several windows overlap, the most recently started discount wins,
//! with the higher id breaking exact start-date ties. The ordering is part
//! of the query, so repeated calls with the same `now` always agree.
//!
//! Every operation takes the current instant as a parameter; nothing in
//! this module reads the system clock.

use crate::{
    core::discount::calculate_discounted_price,
    entities::{Discount, discount, product},
    errors::Result,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{Condition, QueryOrder, prelude::*};

/// One consistent observation of a product's price display.
///
/// Built from a single discount resolution, so the effective price, the
/// percent and the strike-through flag can never disagree with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTag {
    /// The undiscounted list price
    pub original_price: Decimal,
    /// The price a buyer pays now
    pub effective_price: Decimal,
    /// Percent of the current discount, 0 when none applies
    pub discount_percent: i32,
    /// True when a discount applies; callers render the original price
    /// struck through when set
    pub is_discounted: bool,
}

/// Resolves the single discount that applies to `product` at `now`.
///
/// Candidates are the product's active discounts whose window contains
/// `now` (start inclusive, end inclusive or open). The winner is the one
/// with the latest start date, then the highest id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn current_discount(
    db: &DatabaseConnection,
    product: &product::Model,
    now: DateTime<Utc>,
) -> Result<Option<discount::Model>> {
    Discount::find()
        .filter(discount::Column::ProductId.eq(product.id))
        .filter(discount::Column::IsActive.eq(true))
        .filter(discount::Column::StartDate.lte(now))
        .filter(
            Condition::any()
                .add(discount::Column::EndDate.is_null())
                .add(discount::Column::EndDate.gte(now)),
        )
        .order_by_desc(discount::Column::StartDate)
        .order_by_desc(discount::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the product's effective price at `now`.
///
/// Delegates to [`current_discount`]; without one, the list price is
/// returned unchanged.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn discounted_price(
    db: &DatabaseConnection,
    product: &product::Model,
    now: DateTime<Utc>,
) -> Result<Decimal> {
    match current_discount(db, product, now).await? {
        Some(discount) => Ok(calculate_discounted_price(&discount, product.price, now)),
        None => Ok(product.price),
    }
}

/// Returns true when any discount applies to `product` at `now`.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn has_active_discount(
    db: &DatabaseConnection,
    product: &product::Model,
    now: DateTime<Utc>,
) -> Result<bool> {
    Ok(current_discount(db, product, now).await?.is_some())
}

/// Returns the percent of the product's current discount, or 0 when none.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn discount_percent_of(
    db: &DatabaseConnection,
    product: &product::Model,
    now: DateTime<Utc>,
) -> Result<i32> {
    Ok(current_discount(db, product, now)
        .await?
        .map_or(0, |d| d.discount_percent))
}

/// Builds the full price display for one product from a single discount
/// resolution.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn price_tag(
    db: &DatabaseConnection,
    product: &product::Model,
    now: DateTime<Utc>,
) -> Result<PriceTag> {
    let current = current_discount(db, product, now).await?;

    Ok(match current {
        Some(discount) => PriceTag {
            original_price: product.price,
            effective_price: calculate_discounted_price(&discount, product.price, now),
            discount_percent: discount.discount_percent,
            is_discounted: true,
        },
        None => PriceTag {
            original_price: product.price,
            effective_price: product.price,
            discount_percent: 0,
            is_discounted: false,
        },
    })
}
