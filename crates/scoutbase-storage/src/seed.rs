// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seed fixtures for the in-memory store.
//!
//! The store never creates or deletes conversations at runtime, so whatever
//! is seeded here is the full conversation universe for a session. The demo
//! set mirrors the marketplace: two venue owners and one fellow inquirer,
//! with one thread left unread.

use scoutbase_core::types::{Conversation, ConversationId, Message, MessageId, SenderRole};

/// Initial contents for a [`MemoryStore`](crate::MemoryStore).
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
}

impl SeedData {
    /// An empty store (useful for tests that build their own fixtures).
    pub fn empty() -> Self {
        Self::default()
    }
}

fn message(
    id: &str,
    conversation: &str,
    sender: SenderRole,
    sender_name: Option<&str>,
    content: &str,
    timestamp: &str,
    read: bool,
    created_at: &str,
) -> Message {
    Message {
        id: MessageId(id.to_string()),
        conversation_id: ConversationId::from(conversation),
        sender,
        sender_name: sender_name.map(str::to_string),
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        read,
        created_at: created_at.to_string(),
    }
}

/// The demo fixture set.
///
/// Conversation `"1"` is the distinguished first seed: it is unread and
/// carries four messages, three read and one unread from the counterpart.
pub fn demo() -> SeedData {
    let conversations = vec![
        Conversation {
            id: ConversationId::from("1"),
            counterpart_name: "Sarah Johnson".into(),
            venue_id: "v1".into(),
            venue_name: "Eagle Ridge Scout Base".into(),
            last_message: "Yes, the first week of July is still open. Shall I hold it for you?"
                .into(),
            timestamp: "2 hours ago".into(),
            unread: true,
            counterpart_is_owner: true,
        },
        Conversation {
            id: ConversationId::from("2"),
            counterpart_name: "Mike Peterson".into(),
            venue_id: "v2".into(),
            venue_name: "Lakeside Camp Ground".into(),
            last_message: "Great, see you in August then!".into(),
            timestamp: "Yesterday".into(),
            unread: false,
            counterpart_is_owner: true,
        },
        Conversation {
            id: ConversationId::from("3"),
            counterpart_name: "Emma Wilson".into(),
            venue_id: "v3".into(),
            venue_name: "Forest Edge Activity Centre".into(),
            last_message: "We ended up booking the spring weekend instead.".into(),
            timestamp: "3 days ago".into(),
            unread: false,
            counterpart_is_owner: false,
        },
    ];

    let messages = vec![
        message(
            "m1",
            "1",
            SenderRole::User,
            None,
            "Hi! We're a troop of 24 looking at the first week of July.",
            "2 days ago",
            true,
            "2026-08-23T09:12:00+00:00",
        ),
        message(
            "m2",
            "1",
            SenderRole::Other,
            Some("Sarah Johnson"),
            "Hello! The base sleeps 30, so your troop would fit comfortably.",
            "2 days ago",
            true,
            "2026-08-23T10:40:00+00:00",
        ),
        message(
            "m3",
            "1",
            SenderRole::User,
            None,
            "Perfect. Does the nightly price include use of the canoes?",
            "Yesterday",
            true,
            "2026-08-24T08:05:00+00:00",
        ),
        message(
            "m4",
            "1",
            SenderRole::Other,
            Some("Sarah Johnson"),
            "Yes, the first week of July is still open. Shall I hold it for you?",
            "2 hours ago",
            false,
            "2026-08-25T07:30:00+00:00",
        ),
        message(
            "m5",
            "2",
            SenderRole::User,
            None,
            "Booking confirmed for the August weekend, thanks for the quick replies.",
            "Yesterday",
            true,
            "2026-08-24T15:20:00+00:00",
        ),
        message(
            "m6",
            "2",
            SenderRole::Other,
            Some("Mike Peterson"),
            "Great, see you in August then!",
            "Yesterday",
            true,
            "2026-08-24T15:45:00+00:00",
        ),
        message(
            "m7",
            "3",
            SenderRole::User,
            None,
            "Did your group keep the autumn dates at Forest Edge?",
            "3 days ago",
            true,
            "2026-08-22T11:00:00+00:00",
        ),
        message(
            "m8",
            "3",
            SenderRole::Other,
            Some("Emma Wilson"),
            "We ended up booking the spring weekend instead.",
            "3 days ago",
            true,
            "2026-08-22T12:15:00+00:00",
        ),
    ];

    SeedData {
        conversations,
        messages,
    }
}
