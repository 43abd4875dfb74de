// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query specifications for the backend table API.
//!
//! Resource services build a [`QuerySpec`] instead of interpolating filter
//! strings into backend predicates. Table and column names are validated as
//! identifiers before dispatch, so user-supplied values can never change the
//! shape of a query.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::ScoutbaseError;

/// Comparison operator for a query filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    Eq,
    Neq,
    Like,
}

/// A single column filter within a [`QuerySpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: Value,
}

/// A validated, structured read query against one backend table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub table: String,
    pub filters: Vec<Filter>,
    pub limit: Option<usize>,
}

impl QuerySpec {
    /// Starts a query over the given table.
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            table: name.into(),
            filters: Vec::new(),
            limit: None,
        }
    }

    /// Adds a column filter.
    pub fn filter(mut self, column: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op,
            value: value.into(),
        });
        self
    }

    /// Caps the number of returned rows.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validates table and column names as identifiers.
    ///
    /// Must be called before handing the spec to a backend client; filter
    /// values are opaque and never validated here.
    pub fn validate(&self) -> Result<(), ScoutbaseError> {
        if !is_identifier(&self.table) {
            return Err(ScoutbaseError::InvalidQuery(format!(
                "table name {:?} is not a valid identifier",
                self.table
            )));
        }
        for filter in &self.filters {
            if !is_identifier(&filter.column) {
                return Err(ScoutbaseError::InvalidQuery(format!(
                    "column name {:?} is not a valid identifier",
                    filter.column
                )));
            }
        }
        Ok(())
    }

    /// Deterministic key for caching results of this query.
    pub fn cache_key(&self) -> String {
        let mut key = self.table.clone();
        for filter in &self.filters {
            key.push_str(&format!("|{} {} {}", filter.column, filter.op, filter.value));
        }
        if let Some(limit) = self.limit {
            key.push_str(&format!("|limit {limit}"));
        }
        key
    }
}

/// True when `s` is a bare identifier: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
