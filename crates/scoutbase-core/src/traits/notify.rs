// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sink trait for surfacing user-visible events.

use async_trait::async_trait;

use crate::types::Notification;

/// Destination for user-facing notifications.
///
/// Delivery is fire-and-forget. No failure in the sink may disturb the flow
/// that raised the notification, so the trait is infallible.
#[async_trait]
pub trait NotificationSink {
    async fn notify(&self, notification: Notification);
}
