//! Catalog read facade - the presentation layer's view of the store.
//!
//! Bundles products with their price display so templates never compute
//! prices themselves, and assembles the product detail page (images,
//! published reviews, average rating). Read-only; nothing here writes.

use crate::{
    core::{
        pricing::{self, PriceTag},
        product::{self, ProductFilter},
        review,
    },
    entities::{
        Product, ProductImage, manufacturer, product as product_entity, product_image,
        product_review,
    },
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::{PaginatorTrait, QueryOrder, prelude::*};

/// One product as shown in a list, price display attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    /// The product row
    pub product: product_entity::Model,
    /// Its resolved price display
    pub price: PriceTag,
}

/// Everything the product detail page needs in one fetch.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    /// The product row
    pub product: product_entity::Model,
    /// Its resolved price display
    pub price: PriceTag,
    /// Image records, main image first, then upload order
    pub images: Vec<product_image::Model>,
    /// Published reviews, newest first
    pub reviews: Vec<product_review::Model>,
    /// Average of the published ratings, None without reviews
    pub average_rating: Option<f64>,
}

/// A manufacturer with the number of products it has in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ManufacturerOverview {
    /// The manufacturer row
    pub manufacturer: manufacturer::Model,
    /// How many products reference it
    pub product_count: u64,
}

/// Lists products matching `filter` with their price tags.
///
/// Each product's tag comes from one discount resolution at `now`, so a
/// listing is internally consistent even while operators edit discounts.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn product_listing(
    db: &DatabaseConnection,
    filter: &ProductFilter,
    now: DateTime<Utc>,
) -> Result<Vec<ProductListing>> {
    let products = product::list_products(db, filter).await?;

    let mut listings = Vec::with_capacity(products.len());
    for product in products {
        let price = pricing::price_tag(db, &product, now).await?;
        listings.push(ProductListing { product, price });
    }
    Ok(listings)
}

/// Assembles the detail view of one product.
///
/// # Errors
/// Returns [`crate::errors::Error::ProductNotFound`] when the id does not
/// exist, or a database error.
pub async fn product_detail(
    db: &DatabaseConnection,
    product_id: i64,
    now: DateTime<Utc>,
) -> Result<ProductDetail> {
    let product = product::get_product(db, product_id).await?;
    let price = pricing::price_tag(db, &product, now).await?;

    let images = ProductImage::find()
        .filter(product_image::Column::ProductId.eq(product.id))
        .order_by_desc(product_image::Column::IsMain)
        .order_by_asc(product_image::Column::UploadedAt)
        .all(db)
        .await?;

    let reviews = review::published_reviews(db, product.id).await?;
    let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
    let average_rating = review::average_rating(&ratings);

    Ok(ProductDetail {
        product,
        price,
        images,
        reviews,
        average_rating,
    })
}

/// Lists all manufacturers with their product counts, alphabetically.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn manufacturer_overview(db: &DatabaseConnection) -> Result<Vec<ManufacturerOverview>> {
    let manufacturers = crate::core::manufacturer::list_manufacturers(db).await?;

    let mut overview = Vec::with_capacity(manufacturers.len());
    for manufacturer in manufacturers {
        let product_count = Product::find()
            .filter(product_entity::Column::ManufacturerId.eq(manufacturer.id))
            .count(db)
            .await?;
        overview.push(ManufacturerOverview {
            manufacturer,
            product_count,
        });
    }
    Ok(overview)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{core::discount, errors::Error, test_utils::*};
    use chrono::Duration;
    use rust_decimal_macros::dec;
    use sea_orm::Set;

    #[tokio::test]
    async fn test_product_listing_attaches_price_tags() -> Result<()> {
        let (db, manufacturer) = setup_with_manufacturer().await?;
        let now = Utc::now();
        let discounted =
            create_custom_product(&db, "Discounted", dec!(200.00), manufacturer.id).await?;
        let plain = create_custom_product(&db, "Plain", dec!(50.00), manufacturer.id).await?;
        create_test_discount(&db, discounted.id, 15, now).await?;

        let listings = product_listing(&db, &ProductFilter::default(), now).await?;
        assert_eq!(listings.len(), 2);

        let find = |id| listings.iter().find(|l| l.product.id == id).unwrap();
        let tagged = find(discounted.id);
        assert!(tagged.price.is_discounted);
        assert_eq!(tagged.price.effective_price, dec!(170.00));

        let untagged = find(plain.id);
        assert!(!untagged.price.is_discounted);
        assert_eq!(untagged.price.effective_price, dec!(50.00));
        Ok(())
    }

    #[tokio::test]
    async fn test_product_detail_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let result = product_detail(&db, 123, Utc::now()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ProductNotFound { id: 123 }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_product_detail_aggregates() -> Result<()> {
        let (db, _manufacturer, product_row) = setup_with_product().await?;
        let now = Utc::now();

        // Two images, the main one uploaded last
        let secondary = crate::entities::product_image::ActiveModel {
            product_id: Set(product_row.id),
            path: Set("products/side.jpg".to_string()),
            caption: Set("Side view".to_string()),
            is_main: Set(false),
            uploaded_at: Set(now - Duration::hours(2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        let main = crate::entities::product_image::ActiveModel {
            product_id: Set(product_row.id),
            path: Set("products/front.jpg".to_string()),
            caption: Set("Front view".to_string()),
            is_main: Set(true),
            uploaded_at: Set(now - Duration::hours(1)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        review::add_review(
            &db,
            product_row.id,
            "Ann".to_string(),
            None,
            4,
            "Solid".to_string(),
            now,
        )
        .await?;
        review::add_review(
            &db,
            product_row.id,
            "Bob".to_string(),
            None,
            5,
            "Excellent".to_string(),
            now,
        )
        .await?;

        let detail = product_detail(&db, product_row.id, now).await?;
        assert_eq!(detail.images.len(), 2);
        assert_eq!(detail.images[0].id, main.id);
        assert_eq!(detail.images[1].id, secondary.id);
        assert_eq!(detail.reviews.len(), 2);
        assert_eq!(detail.average_rating, Some(4.5));
        assert!(!detail.price.is_discounted);
        Ok(())
    }

    #[tokio::test]
    async fn test_detail_price_consistent_with_discount() -> Result<()> {
        let (db, manufacturer) = setup_with_manufacturer().await?;
        let now = Utc::now();
        let product_row =
            create_custom_product(&db, "On sale", dec!(1000.00), manufacturer.id).await?;
        discount::create_discount(
            &db,
            product_row.id,
            15,
            Some(now - Duration::hours(1)),
            Some(now + Duration::days(29)),
            true,
            now,
        )
        .await?;

        let detail = product_detail(&db, product_row.id, now).await?;
        assert!(detail.price.is_discounted);
        assert_eq!(detail.price.discount_percent, 15);
        assert_eq!(detail.price.effective_price, dec!(850.00));
        Ok(())
    }

    #[tokio::test]
    async fn test_manufacturer_overview_counts() -> Result<()> {
        let db = setup_test_db().await?;
        let acme = create_test_manufacturer(&db, "Acme Audio").await?;
        let idle = create_test_manufacturer(&db, "Idle Corp").await?;
        create_test_product(&db, "A", acme.id).await?;
        create_test_product(&db, "B", acme.id).await?;

        let overview = manufacturer_overview(&db).await?;
        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].manufacturer.id, acme.id);
        assert_eq!(overview[0].product_count, 2);
        assert_eq!(overview[1].manufacturer.id, idle.id);
        assert_eq!(overview[1].product_count, 0);
        Ok(())
    }
}
