//! Notification seam for round reminders.
//!
//! The core never talks to a chat platform directly. Event actors hand
//! finished-round reminders to a [`Notifier`], and the front end decides
//! how to deliver them. Delivery is best-effort: reminders are not retried
//! and a failed delivery is only logged by the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::{ChatId, Username};

/// Notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Destination channel cannot be reached
    #[error("Notification channel unavailable: {0}")]
    Unavailable(String),

    /// Reminder payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for notification operations
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Payload of a round-completion reminder: the participants whose matches
/// were still undecided when the round's clock was started.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundReminder {
    /// Name of the event the round belongs to
    pub event_name: String,
    /// The round this reminder is about, 1-based
    pub round: u32,
    /// Participants to remind, each exactly once, in match order
    pub participants: Vec<Username>,
}

/// Delivery sink for round reminders
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one reminder to the given channel
    async fn round_reminder(&self, chat_id: ChatId, reminder: RoundReminder) -> NotifyResult<()>;
}

/// Notifier that writes reminders to the log. Default sink when no front
/// end is attached; also handy in examples and local runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn round_reminder(&self, chat_id: ChatId, reminder: RoundReminder) -> NotifyResult<()> {
        let payload = serde_json::to_string(&reminder)?;
        log::info!("Round reminder for chat {chat_id}: {payload}");
        Ok(())
    }
}
