// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory message store for the Scoutbase messaging core.
//!
//! Provides [`MemoryStore`], an owned, seed-injectable implementation of the
//! [`MessageStore`](scoutbase_core::MessageStore) trait with an artificial
//! latency model and one-shot fault injection. The store is non-durable by
//! design: it models a hosted backend's behavior, not its persistence.

pub mod memory;
pub mod seed;

pub use memory::{Latency, MemoryStore, StoreOp, JUST_NOW};
pub use seed::SeedData;
