// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation orchestration for the Scoutbase messaging core.
//!
//! [`SessionController`] is the consumer-facing surface: it owns the loaded
//! conversation/message snapshots, drives selection and the
//! send-and-scripted-reply flow, and degrades every failure to a
//! notification. [`ReplyScheduler`] keeps the scripted reply cancelable and
//! scoped to its conversation and session.

pub mod controller;
pub mod filter;
pub mod notify;
pub mod reply;

pub use controller::{Phase, SessionConfig, SessionController};
pub use filter::filter_conversations;
pub use notify::{BufferedNotifier, TracingNotifier};
pub use reply::{ReplyScheduler, DEFAULT_REPLY, FIRST_SEED_REPLY};
