/// Database configuration and connection management
pub mod database;

/// Newsletter configuration loading from newsletter.toml
pub mod newsletter;
