//! Notifier port - where notifications are delivered

use crate::domain::result::Result;
use crate::domain::Notification;

/// Delivery backend for notifications
///
/// The notification service validates a message before handing it over, so
/// implementations only deal with delivery.
pub trait Notifier: Send {
    /// Backend name (e.g., "console")
    fn name(&self) -> &str;

    /// Deliver one notification
    fn send(&mut self, notification: &Notification) -> Result<()>;
}
