// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Venue listing reads and mutations with read-through caching.
//!
//! Reads are cached per query until any mutation runs; mutations clear the
//! whole cache rather than tracking which queries a row affects.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use scoutbase_core::error::ScoutbaseError;
use scoutbase_core::query::{Filter, FilterOp, QuerySpec};
use scoutbase_core::traits::{BackendClient, NotificationSink};
use scoutbase_core::types::{Notification, Venue, VenueDraft};

const TABLE: &str = "venues";

/// Typed partial update for a venue row. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Venue resource service over the backend table API.
pub struct VenueCatalog {
    backend: Arc<dyn BackendClient + Send + Sync>,
    notifier: Arc<dyn NotificationSink + Send + Sync>,
    cache: DashMap<String, Vec<Venue>>,
}

impl VenueCatalog {
    pub fn new(
        backend: Arc<dyn BackendClient + Send + Sync>,
        notifier: Arc<dyn NotificationSink + Send + Sync>,
    ) -> Self {
        Self {
            backend,
            notifier,
            cache: DashMap::new(),
        }
    }

    /// All venues.
    pub async fn list(&self) -> Result<Vec<Venue>, ScoutbaseError> {
        self.fetch(QuerySpec::table(TABLE)).await
    }

    /// Venues owned by one user.
    pub async fn for_owner(&self, owner_id: &str) -> Result<Vec<Venue>, ScoutbaseError> {
        self.fetch(QuerySpec::table(TABLE).filter("owner_id", FilterOp::Eq, owner_id))
            .await
    }

    pub async fn create(&self, draft: VenueDraft) -> Result<Venue, ScoutbaseError> {
        let row = serde_json::to_value(&draft)
            .map_err(|e| ScoutbaseError::Internal(e.to_string()))?;
        let stored = match self.backend.insert(TABLE, row).await {
            Ok(stored) => stored,
            Err(e) => return Err(self.surface("Failed to create venue", e).await),
        };
        self.cache.clear();
        decode_venue(stored)
    }

    pub async fn update(&self, id: &str, update: VenueUpdate) -> Result<(), ScoutbaseError> {
        let patch = serde_json::to_value(&update)
            .map_err(|e| ScoutbaseError::Internal(e.to_string()))?;
        if let Err(e) = self.backend.update(TABLE, &id_filter(id), patch).await {
            return Err(self.surface("Failed to update venue", e).await);
        }
        self.cache.clear();
        Ok(())
    }

    pub async fn remove(&self, id: &str) -> Result<(), ScoutbaseError> {
        if let Err(e) = self.backend.delete(TABLE, &id_filter(id)).await {
            return Err(self.surface("Failed to delete venue", e).await);
        }
        self.cache.clear();
        Ok(())
    }

    async fn fetch(&self, query: QuerySpec) -> Result<Vec<Venue>, ScoutbaseError> {
        query.validate()?;
        let key = query.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "venue query served from cache");
            return Ok(hit.clone());
        }

        let rows = match self.backend.select(&query).await {
            Ok(rows) => rows,
            Err(e) => return Err(self.surface("Failed to load venues", e).await),
        };
        let venues = rows
            .into_iter()
            .map(decode_venue)
            .collect::<Result<Vec<_>, _>>()?;
        self.cache.insert(key, venues.clone());
        Ok(venues)
    }

    /// Raises the failure as a notification and hands the error back.
    async fn surface(&self, title: &str, error: ScoutbaseError) -> ScoutbaseError {
        self.notifier
            .notify(Notification::error(title, error.to_string()))
            .await;
        error
    }
}

fn id_filter(id: &str) -> [Filter; 1] {
    [Filter {
        column: "id".into(),
        op: FilterOp::Eq,
        value: id.into(),
    }]
}

fn decode_venue(row: serde_json::Value) -> Result<Venue, ScoutbaseError> {
    serde_json::from_value(row).map_err(|e| ScoutbaseError::Backend {
        message: "venue row did not match the expected shape".into(),
        source: Some(Box::new(e)),
    })
}
