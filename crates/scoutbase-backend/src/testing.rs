// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory doubles for the backend and auth boundaries, shared by the
//! service test modules in this crate.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use scoutbase_core::error::ScoutbaseError;
use scoutbase_core::query::{Filter, FilterOp, QuerySpec};
use scoutbase_core::traits::{AuthProvider, BackendClient, NotificationSink};
use scoutbase_core::types::{AuthSession, AuthUser, Credentials, Notification, ProfileUpdate};

/// Notification sink that records everything it is handed.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) seen: Mutex<Vec<Notification>>,
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn notify(&self, notification: Notification) {
        self.seen.lock().await.push(notification);
    }
}

fn matches(row: &Value, filter: &Filter) -> bool {
    let Some(cell) = row.get(&filter.column) else {
        return false;
    };
    match filter.op {
        FilterOp::Eq => cell == &filter.value,
        FilterOp::Neq => cell != &filter.value,
        FilterOp::Like => match (cell.as_str(), filter.value.as_str()) {
            (Some(cell), Some(needle)) => cell.contains(needle),
            _ => false,
        },
    }
}

/// JSON-table backend double with one-shot fault injection and call counting.
#[derive(Default)]
pub(crate) struct MemoryBackend {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    faults: Mutex<HashSet<&'static str>>,
    pub(crate) select_calls: AtomicUsize,
}

impl MemoryBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn with_rows(table: &str, rows: Vec<Value>) -> Self {
        let backend = Self::new();
        backend.tables.lock().await.insert(table.to_string(), rows);
        backend
    }

    pub(crate) async fn fail_next(&self, op: &'static str) {
        self.faults.lock().await.insert(op);
    }

    /// Mutates a table directly, bypassing the service layer (for cache tests).
    pub(crate) async fn push_row(&self, table: &str, row: Value) {
        self.tables
            .lock()
            .await
            .entry(table.to_string())
            .or_default()
            .push(row);
    }

    async fn take_fault(&self, op: &'static str) -> Result<(), ScoutbaseError> {
        if self.faults.lock().await.remove(op) {
            return Err(ScoutbaseError::backend(format!("injected fault in {op}")));
        }
        Ok(())
    }
}

#[async_trait]
impl BackendClient for MemoryBackend {
    async fn select(&self, query: &QuerySpec) -> Result<Vec<Value>, ScoutbaseError> {
        self.select_calls.fetch_add(1, Ordering::SeqCst);
        self.take_fault("select").await?;
        let tables = self.tables.lock().await;
        let rows = tables.get(&query.table).cloned().unwrap_or_default();
        let mut hits: Vec<Value> = rows
            .into_iter()
            .filter(|row| query.filters.iter().all(|f| matches(row, f)))
            .collect();
        if let Some(limit) = query.limit {
            hits.truncate(limit);
        }
        Ok(hits)
    }

    async fn insert(&self, table: &str, mut row: Value) -> Result<Value, ScoutbaseError> {
        self.take_fault("insert").await?;
        let mut tables = self.tables.lock().await;
        let rows = tables.entry(table.to_string()).or_default();
        if row.get("id").is_none() {
            if let Some(object) = row.as_object_mut() {
                object.insert("id".into(), Value::String(format!("r{}", rows.len() + 1)));
            }
        }
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Value,
    ) -> Result<(), ScoutbaseError> {
        self.take_fault("update").await?;
        let Some(patch) = patch.as_object() else {
            return Err(ScoutbaseError::backend("patch must be a JSON object"));
        };
        let mut tables = self.tables.lock().await;
        if let Some(rows) = tables.get_mut(table) {
            for row in rows
                .iter_mut()
                .filter(|row| filters.iter().all(|f| matches(row, f)))
            {
                if let Some(object) = row.as_object_mut() {
                    for (key, value) in patch {
                        object.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        Ok(())
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), ScoutbaseError> {
        self.take_fault("delete").await?;
        let mut tables = self.tables.lock().await;
        if let Some(rows) = tables.get_mut(table) {
            rows.retain(|row| !filters.iter().all(|f| matches(row, f)));
        }
        Ok(())
    }
}

/// Auth provider double with a fixed account book and call counting.
#[derive(Default)]
pub(crate) struct StubAuth {
    /// email -> (password, user id)
    accounts: HashMap<String, (String, String)>,
    /// user id -> email
    emails: HashMap<String, String>,
    session: Mutex<Option<AuthSession>>,
    pub(crate) emails_for_calls: AtomicUsize,
}

impl StubAuth {
    pub(crate) fn with_accounts(entries: &[(&str, &str, &str)]) -> Self {
        let mut auth = Self::default();
        for (id, email, password) in entries {
            auth.accounts
                .insert(email.to_string(), (password.to_string(), id.to_string()));
            auth.emails.insert(id.to_string(), email.to_string());
        }
        auth
    }
}

#[async_trait]
impl AuthProvider for StubAuth {
    async fn session(&self) -> Result<Option<AuthSession>, ScoutbaseError> {
        Ok(self.session.lock().await.clone())
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, ScoutbaseError> {
        let Some((password, id)) = self.accounts.get(&credentials.email) else {
            return Err(ScoutbaseError::Auth("invalid credentials".into()));
        };
        if password != &credentials.password {
            return Err(ScoutbaseError::Auth("invalid credentials".into()));
        }
        let session = AuthSession {
            user: AuthUser {
                id: id.clone(),
                email: credentials.email.clone(),
            },
            access_token: format!("token-{id}"),
        };
        *self.session.lock().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        _display_name: &str,
    ) -> Result<AuthSession, ScoutbaseError> {
        if self.accounts.contains_key(&credentials.email) {
            return Err(ScoutbaseError::Auth("email already registered".into()));
        }
        let session = AuthSession {
            user: AuthUser {
                id: "new-user".into(),
                email: credentials.email.clone(),
            },
            access_token: "token-new-user".into(),
        };
        *self.session.lock().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), ScoutbaseError> {
        *self.session.lock().await = None;
        Ok(())
    }

    async fn update_profile(&self, _update: &ProfileUpdate) -> Result<(), ScoutbaseError> {
        if self.session.lock().await.is_none() {
            return Err(ScoutbaseError::Auth("no active session".into()));
        }
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), ScoutbaseError> {
        if !self.accounts.contains_key(email) {
            return Err(ScoutbaseError::Auth("unknown email".into()));
        }
        Ok(())
    }

    async fn emails_for(
        &self,
        user_ids: &[String],
    ) -> Result<HashMap<String, String>, ScoutbaseError> {
        self.emails_for_calls.fetch_add(1, Ordering::SeqCst);
        Ok(user_ids
            .iter()
            .filter_map(|id| self.emails.get(id).map(|email| (id.clone(), email.clone())))
            .collect())
    }
}
