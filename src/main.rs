//! Newsletter dispatch command.
//!
//! Selects the active subscribers and hands the configured message to the
//! delivery sink, mirroring a scheduled site job. The bundled sink logs
//! instead of sending; real mail transport plugs in behind
//! [`storefront::core::newsletter::NewsletterSink`].

use dotenvy::dotenv;
use std::env;
use storefront::config::{database, newsletter::load_newsletter_config};
use storefront::core::newsletter::{LoggingSink, send_newsletter};
use storefront::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the newsletter configuration
    let config_path =
        env::var("NEWSLETTER_CONFIG").unwrap_or_else(|_| "newsletter.toml".to_string());
    let config = load_newsletter_config(&config_path)
        .inspect_err(|e| error!("Failed to load newsletter configuration: {}", e))?;
    info!(
        "Loaded newsletter configuration from {} (from: {})",
        config_path, config.from_address
    );

    // 4. Connect to the database and make sure the schema exists
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    // 5. Dispatch to every active subscriber
    let sent = send_newsletter(&db, &LoggingSink, &config.subject, &config.body).await?;
    if sent == 0 {
        info!("No active subscribers found.");
    } else {
        info!("Successfully dispatched newsletter to {} subscriber(s).", sent);
    }

    Ok(())
}
