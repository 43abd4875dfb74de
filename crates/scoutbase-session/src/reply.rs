// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cancelable scheduling for the scripted counterpart reply.
//!
//! Every pending reply runs under a token that is a child of its
//! conversation's token, which in turn is a child of the session root.
//! Cancelling a conversation aborts that conversation's pending replies;
//! closing the session aborts everything. A fired task re-checks its token
//! after every await, so no state is touched once the session is gone.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use scoutbase_core::types::ConversationId;

/// Canned reply for the distinguished first seed conversation.
pub const FIRST_SEED_REPLY: &str =
    "Yes, that works! The base is free for your dates. Would you like me to pencil in a reservation?";

/// Canned reply for every other conversation.
pub const DEFAULT_REPLY: &str =
    "Thanks for reaching out! I'll check the calendar and get back to you as soon as possible.";

/// Maximum length of a reply summary in a notification, in characters.
const SUMMARY_LIMIT: usize = 60;

/// Truncates reply content for a notification description.
pub(crate) fn summarize(content: &str) -> String {
    if content.chars().count() <= SUMMARY_LIMIT {
        return content.to_string();
    }
    let truncated: String = content.chars().take(SUMMARY_LIMIT).collect();
    format!("{truncated}...")
}

/// Hands out cancellation tokens for pending scripted replies.
pub struct ReplyScheduler {
    root: CancellationToken,
    per_conversation: Mutex<HashMap<ConversationId, CancellationToken>>,
}

impl Default for ReplyScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyScheduler {
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
            per_conversation: Mutex::new(HashMap::new()),
        }
    }

    /// Returns a token for one pending reply targeting `id`.
    ///
    /// The token is cancelled when either the conversation or the whole
    /// session is cancelled.
    pub async fn token_for(&self, id: &ConversationId) -> CancellationToken {
        let mut per_conversation = self.per_conversation.lock().await;
        per_conversation
            .entry(id.clone())
            .or_insert_with(|| self.root.child_token())
            .child_token()
    }

    /// Cancels every pending reply targeting `id`.
    ///
    /// Later replies for the same conversation get a fresh token.
    pub async fn cancel_conversation(&self, id: &ConversationId) {
        if let Some(token) = self.per_conversation.lock().await.remove(id) {
            token.cancel();
            debug!(conversation_id = %id, "pending replies cancelled");
        }
    }

    /// Cancels every pending reply; the session is over.
    pub fn cancel_all(&self) {
        self.root.cancel();
    }

    /// True once [`cancel_all`](Self::cancel_all) has run.
    pub fn is_closed(&self) -> bool {
        self.root.is_cancelled()
    }
}
