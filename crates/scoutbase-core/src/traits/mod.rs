// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the boundaries of the messaging core.

pub mod auth;
pub mod backend;
pub mod notify;
pub mod store;

pub use auth::AuthProvider;
pub use backend::BackendClient;
pub use notify::NotificationSink;
pub use store::MessageStore;
