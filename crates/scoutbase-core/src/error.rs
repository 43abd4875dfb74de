// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Scoutbase messaging core.

use thiserror::Error;

use crate::types::ConversationId;

/// The primary error type used across all Scoutbase adapter traits and
/// core operations.
#[derive(Debug, Error)]
pub enum ScoutbaseError {
    /// Message store errors (simulated I/O failure, injected faults).
    #[error("store error: {source}")]
    Store {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A store or session operation referenced a conversation that does
    /// not exist.
    #[error("unknown conversation: {0}")]
    UnknownConversation(ConversationId),

    /// Backend table API errors (query failure, row shape mismatch).
    #[error("backend error: {message}")]
    Backend {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Auth provider errors (sign-in rejected, no active session).
    #[error("auth error: {0}")]
    Auth(String),

    /// A query spec failed validation before dispatch.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ScoutbaseError {
    /// Wraps an arbitrary error as a store failure.
    pub fn store(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Store {
            source: source.into(),
        }
    }

    /// Builds a backend failure from a plain message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }
}
