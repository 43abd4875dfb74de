// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend table API trait for venue and profile resources.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ScoutbaseError;
use crate::query::{Filter, QuerySpec};

/// Client for the hosted backend's table API.
///
/// Rows travel as JSON values; resource services deserialize at their edge.
/// Callers are responsible for validating the [`QuerySpec`] before dispatch.
#[async_trait]
pub trait BackendClient {
    /// Runs a read query and returns the matching rows.
    async fn select(&self, query: &QuerySpec) -> Result<Vec<Value>, ScoutbaseError>;

    /// Inserts one row and returns it as stored (with assigned fields).
    async fn insert(&self, table: &str, row: Value) -> Result<Value, ScoutbaseError>;

    /// Applies a partial update to every row matching the filters.
    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Value,
    ) -> Result<(), ScoutbaseError>;

    /// Deletes every row matching the filters.
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), ScoutbaseError>;
}
