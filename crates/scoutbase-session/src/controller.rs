// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session-scoped controller driving the messaging flow.
//!
//! The controller loads conversations on initialization, auto-selects the
//! first one, reloads the active thread when the selection changes (marking
//! it read as a side effect), and runs the send-and-scripted-reply flow.
//! Every failure degrades to a user-visible notification; nothing here is
//! fatal and nothing retries automatically.

use std::sync::Arc;
use std::time::Duration;

use strum::Display;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use scoutbase_core::error::ScoutbaseError;
use scoutbase_core::traits::{MessageStore, NotificationSink};
use scoutbase_core::types::{
    Conversation, ConversationId, Message, MessageDraft, Notification, SenderRole, JUST_NOW,
};

use crate::reply::{summarize, ReplyScheduler, DEFAULT_REPLY, FIRST_SEED_REPLY};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Constructed but [`initialize`](SessionController::initialize) has not
    /// completed.
    Uninitialized,
    /// Conversations loaded (possibly empty); accepting user actions.
    Ready,
    /// A send is in flight.
    Sending,
}

/// Tunables for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Delay before the scripted counterpart reply lands.
    pub reply_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_secs(2),
        }
    }
}

struct SessionState {
    phase: Phase,
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
    active: Option<ConversationId>,
    /// Id of the first conversation seen at initialization; its scripted
    /// reply differs from everyone else's.
    first_seed: Option<ConversationId>,
    loading: bool,
}

/// Orchestrates one user's messaging session over a [`MessageStore`].
pub struct SessionController {
    store: Arc<dyn MessageStore + Send + Sync>,
    notifier: Arc<dyn NotificationSink + Send + Sync>,
    state: Arc<Mutex<SessionState>>,
    scheduler: Arc<ReplyScheduler>,
    reply_delay: Duration,
}

impl SessionController {
    pub fn new(
        store: Arc<dyn MessageStore + Send + Sync>,
        notifier: Arc<dyn NotificationSink + Send + Sync>,
        config: SessionConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            state: Arc::new(Mutex::new(SessionState {
                phase: Phase::Uninitialized,
                conversations: Vec::new(),
                messages: Vec::new(),
                active: None,
                first_seed: None,
                loading: false,
            })),
            scheduler: Arc::new(ReplyScheduler::new()),
            reply_delay: config.reply_delay,
        }
    }

    /// Loads the conversation list and auto-selects the first conversation.
    ///
    /// On load failure the session still becomes [`Phase::Ready`] with an
    /// empty list, and the failure surfaces as a notification.
    pub async fn initialize(&self) {
        self.state.lock().await.loading = true;

        match self.store.list_conversations().await {
            Ok(conversations) => {
                let first = conversations.first().map(|c| c.id.clone());
                {
                    let mut state = self.state.lock().await;
                    state.first_seed = first.clone();
                    state.conversations = conversations;
                    state.phase = Phase::Ready;
                    state.loading = false;
                }
                debug!(selected = ?first, "session initialized");
                if let Some(id) = first {
                    self.select_conversation(id).await;
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to load conversations");
                {
                    let mut state = self.state.lock().await;
                    state.conversations.clear();
                    state.phase = Phase::Ready;
                    state.loading = false;
                }
                self.notifier
                    .notify(Notification::error(
                        "Failed to load conversations",
                        e.to_string(),
                    ))
                    .await;
            }
        }
    }

    /// Switches the active conversation.
    ///
    /// Marks the thread read, reloads the conversation list (so the cleared
    /// unread flag shows), then reloads the thread's messages. The selection
    /// itself is never rolled back; on failure the previously loaded data
    /// stays visible and a notification is raised.
    pub async fn select_conversation(&self, id: ConversationId) {
        {
            let mut state = self.state.lock().await;
            state.active = Some(id.clone());
            state.loading = true;
        }

        let result = async {
            self.store.mark_read(&id).await?;
            let conversations = self.store.list_conversations().await?;
            let messages = self.store.messages(&id).await?;
            Ok::<_, ScoutbaseError>((conversations, messages))
        }
        .await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok((conversations, messages)) => {
                state.conversations = conversations;
                state.messages = messages;
                debug!(conversation_id = %id, count = state.messages.len(), "conversation opened");
            }
            Err(e) => {
                drop(state);
                warn!(conversation_id = %id, error = %e, "failed to open conversation");
                self.notifier
                    .notify(Notification::error(
                        "Failed to open conversation",
                        e.to_string(),
                    ))
                    .await;
            }
        }
    }

    /// Sends `text` into the active conversation and schedules the scripted
    /// counterpart reply.
    ///
    /// Whitespace-only input is a no-op: no store call is made and `false`
    /// is returned. Store failures surface as a notification and leave
    /// local state unchanged.
    pub async fn send_message(&self, text: &str) -> bool {
        let content = text.trim();
        if content.is_empty() {
            return false;
        }

        let Some(conversation) = ({
            let state = self.state.lock().await;
            state.active.as_ref().and_then(|id| {
                state
                    .conversations
                    .iter()
                    .find(|c| &c.id == id)
                    .cloned()
            })
        }) else {
            debug!("send ignored: no active conversation");
            return false;
        };

        self.state.lock().await.phase = Phase::Sending;

        let draft = MessageDraft {
            conversation_id: conversation.id.clone(),
            sender: SenderRole::User,
            sender_name: None,
            content: content.to_string(),
            timestamp: JUST_NOW.to_string(),
            read: false,
        };

        if let Err(e) = self.store.send(draft).await {
            warn!(conversation_id = %conversation.id, error = %e, "send failed");
            self.state.lock().await.phase = Phase::Ready;
            self.notifier
                .notify(Notification::error("Failed to send message", e.to_string()))
                .await;
            return false;
        }

        self.refresh(&conversation.id).await;
        self.schedule_reply(conversation).await;
        self.state.lock().await.phase = Phase::Ready;
        true
    }

    /// Reloads the active thread and the conversation list, surfacing any
    /// failure as a notification while keeping the previous data.
    async fn refresh(&self, id: &ConversationId) {
        let result = async {
            let messages = self.store.messages(id).await?;
            let conversations = self.store.list_conversations().await?;
            Ok::<_, ScoutbaseError>((messages, conversations))
        }
        .await;

        match result {
            Ok((messages, conversations)) => {
                let mut state = self.state.lock().await;
                state.messages = messages;
                state.conversations = conversations;
            }
            Err(e) => {
                warn!(conversation_id = %id, error = %e, "refresh failed");
                self.notifier
                    .notify(Notification::error(
                        "Failed to refresh messages",
                        e.to_string(),
                    ))
                    .await;
            }
        }
    }

    /// Schedules the scripted counterpart reply for `conversation`.
    ///
    /// The task is keyed to the conversation under the session root token.
    /// When it fires it appends the canned reply store-side, refreshes the
    /// visible thread only if that conversation is still active, refreshes
    /// the conversation list, and raises a summary notification.
    async fn schedule_reply(&self, conversation: Conversation) {
        let token = self.scheduler.token_for(&conversation.id).await;
        let is_first_seed = {
            let state = self.state.lock().await;
            state.first_seed.as_ref() == Some(&conversation.id)
        };

        let store = Arc::clone(&self.store);
        let notifier = Arc::clone(&self.notifier);
        let state = Arc::clone(&self.state);
        let delay = self.reply_delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(conversation_id = %conversation.id, "scripted reply cancelled");
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            let content = if is_first_seed {
                FIRST_SEED_REPLY
            } else {
                DEFAULT_REPLY
            };
            let draft = MessageDraft {
                conversation_id: conversation.id.clone(),
                sender: SenderRole::Other,
                sender_name: Some(conversation.counterpart_name.clone()),
                content: content.to_string(),
                timestamp: JUST_NOW.to_string(),
                read: true,
            };

            let reply = match store.send(draft).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(conversation_id = %conversation.id, error = %e, "scripted reply failed");
                    notifier
                        .notify(Notification::error(
                            "Failed to deliver reply",
                            e.to_string(),
                        ))
                        .await;
                    return;
                }
            };

            // The session may have closed while the send was in flight.
            if token.is_cancelled() {
                return;
            }

            let still_active = {
                let state = state.lock().await;
                state.active.as_ref() == Some(&conversation.id)
            };
            if still_active {
                match store.messages(&conversation.id).await {
                    Ok(messages) => state.lock().await.messages = messages,
                    Err(e) => {
                        warn!(conversation_id = %conversation.id, error = %e, "reply refresh failed")
                    }
                }
            }
            match store.list_conversations().await {
                Ok(conversations) => state.lock().await.conversations = conversations,
                Err(e) => warn!(error = %e, "conversation refresh failed"),
            }

            info!(
                conversation_id = %conversation.id,
                from = %conversation.counterpart_name,
                "scripted reply delivered"
            );
            notifier
                .notify(Notification::info(
                    format!("New message from {}", conversation.counterpart_name),
                    summarize(&reply.content),
                ))
                .await;
        });
    }

    /// Ends the session: cancels every pending scripted reply.
    pub async fn close(&self) {
        self.scheduler.cancel_all();
        debug!("session closed");
    }

    // --- Snapshot accessors for consumers ---

    pub async fn conversations(&self) -> Vec<Conversation> {
        self.state.lock().await.conversations.clone()
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.state.lock().await.messages.clone()
    }

    pub async fn active_conversation(&self) -> Option<ConversationId> {
        self.state.lock().await.active.clone()
    }

    pub async fn phase(&self) -> Phase {
        self.state.lock().await.phase
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        // Pending reply tasks must never outlive their session.
        self.scheduler.cancel_all();
    }
}
