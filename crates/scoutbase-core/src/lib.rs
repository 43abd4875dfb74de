// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Scoutbase messaging core.
//!
//! This crate provides the domain types, error type, query specifications,
//! and adapter traits shared across the Scoutbase workspace. The storage,
//! session, and backend crates all build on the definitions here.

pub mod error;
pub mod query;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ScoutbaseError;
pub use query::{Filter, FilterOp, QuerySpec};
pub use types::{
    Conversation, ConversationId, Message, MessageDraft, MessageId, Notification, SenderRole,
    Severity, JUST_NOW,
};

pub use traits::{AuthProvider, BackendClient, MessageStore, NotificationSink};
