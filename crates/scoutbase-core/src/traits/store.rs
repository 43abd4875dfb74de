// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message store trait for conversation and message persistence.

use async_trait::async_trait;

use crate::error::ScoutbaseError;
use crate::types::{Conversation, ConversationId, Message, MessageDraft};

/// Storage for conversations and messages.
///
/// Every operation is asynchronous and may model network latency. The
/// canonical implementation is the in-memory `MemoryStore` in
/// `scoutbase-storage`, but the session layer only depends on this trait.
///
/// Ordering contract: when a mutating operation's future resolves, its
/// effect is visible to every subsequent read issued by the same caller.
#[async_trait]
pub trait MessageStore {
    /// Returns all conversations in insertion order.
    async fn list_conversations(&self) -> Result<Vec<Conversation>, ScoutbaseError>;

    /// Returns one conversation, or `None` when the id is unknown.
    async fn get_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Conversation>, ScoutbaseError>;

    /// Returns all messages in the conversation, in append order.
    async fn messages(&self, id: &ConversationId) -> Result<Vec<Message>, ScoutbaseError>;

    /// Appends a message and updates the owning conversation's preview.
    ///
    /// Fails with [`ScoutbaseError::UnknownConversation`] when the draft
    /// references a conversation that does not exist.
    async fn send(&self, draft: MessageDraft) -> Result<Message, ScoutbaseError>;

    /// Marks every message in the conversation read and clears the
    /// conversation's unread flag. Idempotent.
    async fn mark_read(&self, id: &ConversationId) -> Result<(), ScoutbaseError>;
}
