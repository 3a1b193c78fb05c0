//! Unified error types for the storefront crate.
//!
//! All fallible operations return [`Result`], which wraps the crate-wide
//! [`Error`] enum. Write-path validation failures are per-record and
//! recoverable; bulk administration actions collect them instead of aborting.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A record failed write-time validation (e.g. a discount percent
    /// outside 1..=100). Recoverable; surfaced per record.
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Product lookup by id failed
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Discount lookup by id failed
    #[error("Discount not found: {id}")]
    DiscountNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Manufacturer lookup by id failed
    #[error("Manufacturer not found: {id}")]
    ManufacturerNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Category lookup by id failed
    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Project lookup by id failed
    #[error("Project not found: {id}")]
    ProjectNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Lecture lookup by id failed
    #[error("Lecture not found: {id}")]
    LectureNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Deletion refused because products still reference the row
    #[error("{entity} is referenced by {count} product(s) and cannot be deleted")]
    ReferencedByProducts {
        /// Entity kind ("manufacturer" or "category")
        entity: &'static str,
        /// Number of referencing products
        count: u64,
    },

    /// The email already has an active newsletter subscription
    #[error("Already subscribed: {email}")]
    AlreadySubscribed {
        /// The duplicate email address
        email: String,
    },

    /// Configuration loading or parsing error
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable reason
        message: String,
    },

    /// Database error from the ORM layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
