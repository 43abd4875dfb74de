// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource services over the hosted backend's table and auth APIs.
//!
//! These are the thin query/mutation wrappers behind the marketplace
//! surfaces: venue listings, the member directory, and account flows. All
//! reads go through validated [`QuerySpec`](scoutbase_core::QuerySpec)s
//! (never interpolated filter strings), reads are cached until the next
//! mutation, and every failure surfaces verbatim through the notification
//! sink with no automatic retry.

pub mod account;
pub mod directory;
pub mod venues;

#[cfg(test)]
pub(crate) mod testing;

pub use account::AccountService;
pub use directory::UserDirectory;
pub use venues::{VenueCatalog, VenueUpdate};
