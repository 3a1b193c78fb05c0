//! Core business logic - framework-agnostic catalog, pricing and site
//! operations.
//!
//! Every function takes the database connection (and, where time matters,
//! the current instant) as an explicit parameter; no module reads ambient
//! global state.

/// Bulk administration actions over selected products
pub mod admin;
/// Presentation-facing read facade
pub mod catalog;
/// Category write/read path with referential protection
pub mod category;
/// Discount validity rules and write path
pub mod discount;
/// Feedback inbox operations
pub mod feedback;
/// Lecture announcements
pub mod lecture;
/// Manufacturer write/read path with referential protection
pub mod manufacturer;
/// Newsletter recipient selection and dispatch seam
pub mod newsletter;
/// Current-discount resolution and effective prices
pub mod pricing;
/// Product write/read path and filtered listings
pub mod product;
/// Portfolio project entries
pub mod project;
/// Product reviews and rating aggregation
pub mod review;
/// Newsletter subscription flow
pub mod subscriber;
