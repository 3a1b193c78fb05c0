//! Newsletter dispatch - recipient selection and the delivery seam.
//!
//! Actual mail transport is outside this crate; [`NewsletterSink`] is the
//! seam a real mailer would plug into, and the bundled [`LoggingSink`]
//! just records what would have been sent.

use crate::{core::subscriber, errors::Result};
use sea_orm::DatabaseConnection;
use tracing::info;

/// Delivery seam for outgoing newsletter mail.
pub trait NewsletterSink {
    /// Hands one message to the transport.
    fn dispatch(&self, to: &str, subject: &str, body: &str);
}

/// Sink that logs each message instead of sending it.
#[derive(Debug, Default)]
pub struct LoggingSink;

impl NewsletterSink for LoggingSink {
    fn dispatch(&self, to: &str, subject: &str, _body: &str) {
        info!("Newsletter '{}' -> {}", subject, to);
    }
}

/// Email addresses of all active subscribers.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn recipients(db: &DatabaseConnection) -> Result<Vec<String>> {
    Ok(subscriber::active_subscribers(db)
        .await?
        .into_iter()
        .map(|s| s.email)
        .collect())
}

/// Sends `subject`/`body` to every active subscriber through `sink`,
/// returning how many messages were dispatched.
///
/// # Errors
/// Returns an error if the recipient query fails.
pub async fn send_newsletter(
    db: &DatabaseConnection,
    sink: &dyn NewsletterSink,
    subject: &str,
    body: &str,
) -> Result<usize> {
    let recipients = recipients(db).await?;
    for email in &recipients {
        sink.dispatch(email, subject, body);
    }
    info!("Newsletter dispatched to {} subscriber(s)", recipients.len());
    Ok(recipients.len())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Sink that records dispatched addresses for assertions.
    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<String>>,
    }

    impl NewsletterSink for RecordingSink {
        fn dispatch(&self, to: &str, _subject: &str, _body: &str) {
            self.sent.lock().unwrap().push(to.to_string());
        }
    }

    #[tokio::test]
    async fn test_recipients_skip_inactive() -> Result<()> {
        let db = setup_test_db().await?;
        let now = Utc::now();
        subscriber::subscribe(&db, "active@example.com", now).await?;
        subscriber::subscribe(&db, "gone@example.com", now).await?;
        subscriber::unsubscribe(&db, "gone@example.com").await?;

        let recipients = recipients(&db).await?;
        assert_eq!(recipients, vec!["active@example.com".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_send_newsletter_dispatches_per_recipient() -> Result<()> {
        let db = setup_test_db().await?;
        let now = Utc::now();
        subscriber::subscribe(&db, "a@example.com", now).await?;
        subscriber::subscribe(&db, "b@example.com", now).await?;

        let sink = RecordingSink::default();
        let count = send_newsletter(&db, &sink, "News", "Latest updates").await?;

        assert_eq!(count, 2);
        assert_eq!(sink.sent.lock().unwrap().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_send_newsletter_without_subscribers() -> Result<()> {
        let db = setup_test_db().await?;
        let sink = RecordingSink::default();
        let count = send_newsletter(&db, &sink, "News", "Body").await?;
        assert_eq!(count, 0);
        Ok(())
    }
}
