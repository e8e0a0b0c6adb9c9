//! Notification service - validate and hand off to a notifier

use crate::domain::result::{Error, Result};
use crate::domain::{Channel, Notification};
use crate::ports::Notifier;

/// Notification service
///
/// Only email is supported; other channels are rejected before the notifier
/// is called.
pub struct NotificationService {
    notifier: Box<dyn Notifier>,
    channel: Channel,
}

impl NotificationService {
    pub fn new(notifier: Box<dyn Notifier>, channel: Channel) -> Self {
        Self { notifier, channel }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Send `message` to the user with `user_id`
    pub fn notify_user(&mut self, user_id: i64, message: &str) -> Result<()> {
        if message.is_empty() {
            return Err(Error::EmptyMessage);
        }

        if self.channel != Channel::Email {
            return Err(Error::UnsupportedChannel(self.channel.to_string()));
        }

        let notification = Notification {
            user_id,
            channel: self.channel,
            message: message.to_string(),
        };

        tracing::debug!(user_id, notifier = self.notifier.name(), "sending notification");
        self.notifier.send(&notification)
    }
}
