//! Console notifier
//!
//! Writes notifications as plain lines instead of delivering them.

use std::io::{self, Write};

use crate::domain::result::Result;
use crate::domain::Notification;
use crate::ports::Notifier;

/// Notifier that prints each notification to a writer (stdout by default)
pub struct ConsoleNotifier<W: Write + Send = io::Stdout> {
    out: W,
}

impl ConsoleNotifier {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn name(&self) -> &str {
        "console"
    }

    fn send(&mut self, notification: &Notification) -> Result<()> {
        writeln!(
            self.out,
            "Sending notification to user {}: {}",
            notification.user_id, notification.message
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Channel;

    #[test]
    fn test_console_line_format() {
        let mut notifier = ConsoleNotifier::with_writer(Vec::new());
        notifier
            .send(&Notification {
                user_id: 7,
                channel: Channel::Email,
                message: "hello".to_string(),
            })
            .unwrap();

        let written = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(written, "Sending notification to user 7: hello\n");
    }
}
