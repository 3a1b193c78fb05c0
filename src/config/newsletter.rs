//! Newsletter configuration loading.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Contents of `newsletter.toml`: what the dispatch command sends.
#[derive(Deserialize, Debug, Clone)]
pub struct NewsletterConfig {
    /// Address the newsletter claims to come from
    pub from_address: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
}

/// Loads the newsletter configuration from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] when the file cannot be read or parsed.
pub fn load_newsletter_config<P: AsRef<Path>>(path: P) -> Result<NewsletterConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading newsletter configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}
