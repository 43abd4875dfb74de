// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Owned in-memory implementation of the message store.
//!
//! All state lives behind a single `tokio::sync::Mutex`, so mutations are
//! serialized store-wide and a mutation is fully applied before its future
//! resolves. The artificial latency models network round trips, not
//! parallelism: reads sleep before reading, mutations apply first and sleep
//! afterwards, which guarantees that a caller awaiting `send` observes the
//! new message in any subsequent read.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use strum::Display;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use scoutbase_core::error::ScoutbaseError;
use scoutbase_core::traits::MessageStore;
use scoutbase_core::types::{Conversation, ConversationId, Message, MessageDraft, MessageId};

use crate::seed::SeedData;

pub use scoutbase_core::types::JUST_NOW;

/// Names the store operations, for fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum StoreOp {
    ListConversations,
    GetConversation,
    Messages,
    Send,
    MarkRead,
}

/// Artificial per-operation delays modeling backend round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list_conversations: Duration,
    pub get_conversation: Duration,
    pub messages: Duration,
    pub send: Duration,
    pub mark_read: Duration,
}

impl Latency {
    /// The delays the hosted-backend simulation uses.
    pub fn simulated() -> Self {
        Self {
            list_conversations: Duration::from_millis(300),
            get_conversation: Duration::from_millis(200),
            messages: Duration::from_millis(300),
            send: Duration::from_millis(200),
            mark_read: Duration::from_millis(100),
        }
    }

    /// Zero delays, for tests and non-interactive tooling.
    pub fn none() -> Self {
        Self {
            list_conversations: Duration::ZERO,
            get_conversation: Duration::ZERO,
            messages: Duration::ZERO,
            send: Duration::ZERO,
            mark_read: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

struct Inner {
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
    faults: HashSet<StoreOp>,
}

impl Inner {
    /// Consumes an armed fault for `op`, if any.
    fn take_fault(&mut self, op: StoreOp) -> Result<(), ScoutbaseError> {
        if self.faults.remove(&op) {
            return Err(ScoutbaseError::store(format!("injected fault in {op}")));
        }
        Ok(())
    }

    fn conversation_mut(
        &mut self,
        id: &ConversationId,
    ) -> Result<&mut Conversation, ScoutbaseError> {
        self.conversations
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| ScoutbaseError::UnknownConversation(id.clone()))
    }

    fn apply_send(&mut self, draft: MessageDraft) -> Result<Message, ScoutbaseError> {
        let conversation = self.conversation_mut(&draft.conversation_id)?;
        conversation.last_message = draft.content.clone();
        conversation.timestamp = JUST_NOW.to_string();

        let message = Message {
            id: MessageId(Uuid::new_v4().to_string()),
            conversation_id: draft.conversation_id,
            sender: draft.sender,
            sender_name: draft.sender_name,
            content: draft.content,
            timestamp: draft.timestamp,
            read: draft.read,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.messages.push(message.clone());
        Ok(message)
    }

    fn apply_mark_read(&mut self, id: &ConversationId) -> Result<(), ScoutbaseError> {
        let conversation = self.conversation_mut(id)?;
        conversation.unread = false;
        for message in self.messages.iter_mut().filter(|m| &m.conversation_id == id) {
            message.read = true;
        }
        Ok(())
    }
}

/// In-memory [`MessageStore`] with injectable seed data.
///
/// Each instance owns its state; tests construct isolated stores instead of
/// sharing anything process-wide.
pub struct MemoryStore {
    inner: Mutex<Inner>,
    latency: Latency,
}

impl MemoryStore {
    /// Builds a store from seed data, validating that every seeded message
    /// references a seeded conversation.
    pub fn new(seed: SeedData, latency: Latency) -> Result<Self, ScoutbaseError> {
        for message in &seed.messages {
            if !seed
                .conversations
                .iter()
                .any(|c| c.id == message.conversation_id)
            {
                return Err(ScoutbaseError::UnknownConversation(
                    message.conversation_id.clone(),
                ));
            }
        }
        Ok(Self {
            inner: Mutex::new(Inner {
                conversations: seed.conversations,
                messages: seed.messages,
                faults: HashSet::new(),
            }),
            latency,
        })
    }

    /// A store seeded with the demo fixture set.
    pub fn demo(latency: Latency) -> Self {
        Self::new(crate::seed::demo(), latency).expect("demo seed is internally consistent")
    }

    /// Arms a one-shot failure for the next invocation of `op`.
    pub async fn fail_next(&self, op: StoreOp) {
        self.inner.lock().await.faults.insert(op);
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn list_conversations(&self) -> Result<Vec<Conversation>, ScoutbaseError> {
        tokio::time::sleep(self.latency.list_conversations).await;
        let mut inner = self.inner.lock().await;
        inner.take_fault(StoreOp::ListConversations)?;
        Ok(inner.conversations.clone())
    }

    async fn get_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Conversation>, ScoutbaseError> {
        tokio::time::sleep(self.latency.get_conversation).await;
        let mut inner = self.inner.lock().await;
        inner.take_fault(StoreOp::GetConversation)?;
        Ok(inner.conversations.iter().find(|c| &c.id == id).cloned())
    }

    async fn messages(&self, id: &ConversationId) -> Result<Vec<Message>, ScoutbaseError> {
        tokio::time::sleep(self.latency.messages).await;
        let mut inner = self.inner.lock().await;
        inner.take_fault(StoreOp::Messages)?;
        Ok(inner
            .messages
            .iter()
            .filter(|m| &m.conversation_id == id)
            .cloned()
            .collect())
    }

    async fn send(&self, draft: MessageDraft) -> Result<Message, ScoutbaseError> {
        let message = {
            let mut inner = self.inner.lock().await;
            inner.take_fault(StoreOp::Send)?;
            inner.apply_send(draft)?
        };
        debug!(
            message_id = %message.id,
            conversation_id = %message.conversation_id,
            sender = %message.sender,
            "message appended"
        );
        tokio::time::sleep(self.latency.send).await;
        Ok(message)
    }

    async fn mark_read(&self, id: &ConversationId) -> Result<(), ScoutbaseError> {
        {
            let mut inner = self.inner.lock().await;
            inner.take_fault(StoreOp::MarkRead)?;
            inner.apply_mark_read(id)?;
        }
        debug!(conversation_id = %id, "conversation marked read");
        tokio::time::sleep(self.latency.mark_read).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use scoutbase_core::types::SenderRole;

    fn draft(conversation: &str, content: &str) -> MessageDraft {
        MessageDraft {
            conversation_id: ConversationId::from(conversation),
            sender: SenderRole::User,
            sender_name: None,
            content: content.to_string(),
            timestamp: JUST_NOW.to_string(),
            read: false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn conversations_come_back_in_seed_order() {
        let store = MemoryStore::demo(Latency::none());
        let conversations = store.list_conversations().await.unwrap();
        let ids: Vec<_> = conversations.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test(start_paused = true)]
    async fn messages_are_scoped_to_one_conversation_in_append_order() {
        let store = MemoryStore::demo(Latency::none());
        let messages = store.messages(&ConversationId::from("1")).await.unwrap();
        assert_eq!(messages.len(), 4);
        assert!(messages
            .iter()
            .all(|m| m.conversation_id == ConversationId::from("1")));
        let ids: Vec<_> = messages.iter().map(|m| m.id.0.as_str()).collect();
        assert_eq!(ids, ["m1", "m2", "m3", "m4"]);
    }

    #[tokio::test(start_paused = true)]
    async fn send_appends_and_rewrites_the_preview() {
        let store = MemoryStore::demo(Latency::none());
        let sent = store.send(draft("2", "Hello")).await.unwrap();

        assert_eq!(sent.content, "Hello");
        assert_eq!(sent.sender, SenderRole::User);
        assert!(!sent.read);

        let conversation = store
            .get_conversation(&ConversationId::from("2"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(conversation.last_message, "Hello");
        assert_eq!(conversation.timestamp, JUST_NOW);

        let messages = store.messages(&ConversationId::from("2")).await.unwrap();
        assert_eq!(messages.last().unwrap().id, sent.id);
    }

    #[tokio::test(start_paused = true)]
    async fn preview_tracks_the_last_of_a_send_sequence() {
        let store = MemoryStore::demo(Latency::none());
        for content in ["first", "second", "third"] {
            store.send(draft("3", content)).await.unwrap();
        }
        let conversation = store
            .get_conversation(&ConversationId::from("3"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(conversation.last_message, "third");
    }

    #[tokio::test(start_paused = true)]
    async fn send_to_unknown_conversation_fails_without_appending() {
        let store = MemoryStore::demo(Latency::none());
        let err = store.send(draft("42", "hi")).await.unwrap_err();
        assert!(matches!(err, ScoutbaseError::UnknownConversation(_)));

        for id in ["1", "2", "3"] {
            let messages = store.messages(&ConversationId::from(id)).await.unwrap();
            assert!(messages.iter().all(|m| m.content != "hi"));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn message_ids_are_unique_across_sends() {
        let store = MemoryStore::demo(Latency::none());
        let a = store.send(draft("1", "one")).await.unwrap();
        let b = store.send(draft("1", "two")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test(start_paused = true)]
    async fn mark_read_clears_the_whole_conversation_and_nothing_else() {
        // Two conversations, each with an unread message, to verify isolation.
        let seed = {
            let mut seed = seed::demo();
            for message in seed
                .messages
                .iter_mut()
                .filter(|m| m.conversation_id == ConversationId::from("2"))
            {
                message.read = false;
            }
            seed.conversations[1].unread = true;
            seed
        };
        let store = MemoryStore::new(seed, Latency::none()).unwrap();

        store.mark_read(&ConversationId::from("1")).await.unwrap();

        let one = store.messages(&ConversationId::from("1")).await.unwrap();
        assert_eq!(one.len(), 4);
        assert!(one.iter().all(|m| m.read));
        let conversation = store
            .get_conversation(&ConversationId::from("1"))
            .await
            .unwrap()
            .unwrap();
        assert!(!conversation.unread);

        // Conversation "2" keeps its unread state.
        let two = store.messages(&ConversationId::from("2")).await.unwrap();
        assert!(two.iter().all(|m| !m.read));
        let other = store
            .get_conversation(&ConversationId::from("2"))
            .await
            .unwrap()
            .unwrap();
        assert!(other.unread);
    }

    #[tokio::test(start_paused = true)]
    async fn mark_read_is_idempotent() {
        let store = MemoryStore::demo(Latency::none());
        store.mark_read(&ConversationId::from("1")).await.unwrap();
        let once = store.messages(&ConversationId::from("1")).await.unwrap();

        store.mark_read(&ConversationId::from("1")).await.unwrap();
        let twice = store.messages(&ConversationId::from("1")).await.unwrap();

        assert_eq!(once, twice);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_latency_delays_each_operation() {
        let store = MemoryStore::demo(Latency::simulated());

        let start = tokio::time::Instant::now();
        store.list_conversations().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(300));

        let start = tokio::time::Instant::now();
        store.mark_read(&ConversationId::from("1")).await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(100));

        let start = tokio::time::Instant::now();
        store.send(draft("1", "hi")).await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn injected_fault_fails_exactly_once_and_leaves_state_intact() {
        let store = MemoryStore::demo(Latency::none());
        store.fail_next(StoreOp::Send).await;

        let err = store.send(draft("1", "doomed")).await.unwrap_err();
        assert!(matches!(err, ScoutbaseError::Store { .. }));
        let messages = store.messages(&ConversationId::from("1")).await.unwrap();
        assert_eq!(messages.len(), 4, "failed send must not append");

        // The fault is one-shot.
        store.send(draft("1", "retry")).await.unwrap();
        let messages = store.messages(&ConversationId::from("1")).await.unwrap();
        assert_eq!(messages.last().unwrap().content, "retry");
    }

    #[tokio::test(start_paused = true)]
    async fn seed_validation_rejects_orphan_messages() {
        let mut seed = SeedData::empty();
        seed.messages.push(Message {
            id: MessageId("orphan".into()),
            conversation_id: ConversationId::from("nope"),
            sender: SenderRole::User,
            sender_name: None,
            content: "dangling".into(),
            timestamp: "now".into(),
            read: false,
            created_at: "2026-08-25T00:00:00+00:00".into(),
        });
        assert!(matches!(
            MemoryStore::new(seed, Latency::none()),
            Err(ScoutbaseError::UnknownConversation(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn get_conversation_returns_none_for_unknown_id() {
        let store = MemoryStore::demo(Latency::none());
        assert!(store
            .get_conversation(&ConversationId::from("404"))
            .await
            .unwrap()
            .is_none());
    }
}
