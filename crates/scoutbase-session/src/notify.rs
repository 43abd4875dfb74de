// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sink implementations.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use scoutbase_core::traits::NotificationSink;
use scoutbase_core::types::{Notification, Severity};

/// Routes notifications to `tracing` at a severity-mapped level.
///
/// Suits headless consumers (the demo CLI) where there is no toast surface.
#[derive(Debug, Default)]
pub struct TracingNotifier;

#[async_trait]
impl NotificationSink for TracingNotifier {
    async fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => {
                info!(title = %notification.title, "{}", notification.description)
            }
            Severity::Warning => {
                warn!(title = %notification.title, "{}", notification.description)
            }
            Severity::Error => {
                error!(title = %notification.title, "{}", notification.description)
            }
        }
    }
}

/// Retains notifications in memory for later display or inspection.
///
/// Backs in-app notification lists and is the sink of choice in tests.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    buffer: Mutex<Vec<Notification>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clones the retained notifications, oldest first.
    pub async fn snapshot(&self) -> Vec<Notification> {
        self.buffer.lock().await.clone()
    }

    /// Removes and returns the retained notifications.
    pub async fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.buffer.lock().await)
    }
}

#[async_trait]
impl NotificationSink for BufferedNotifier {
    async fn notify(&self, notification: Notification) {
        self.buffer.lock().await.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn buffered_notifier_retains_in_order() {
        let sink = BufferedNotifier::new();
        sink.notify(Notification::info("first", "a")).await;
        sink.notify(Notification::error("second", "b")).await;

        let seen = sink.snapshot().await;
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].title, "first");
        assert_eq!(seen[1].title, "second");
        assert_eq!(seen[1].severity, Severity::Error);
    }

    #[tokio::test]
    async fn drain_empties_the_buffer() {
        let sink = BufferedNotifier::new();
        sink.notify(Notification::info("only", "x")).await;

        assert_eq!(sink.drain().await.len(), 1);
        assert!(sink.snapshot().await.is_empty());
    }
}
