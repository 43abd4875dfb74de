// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Member directory over the profiles table and the auth admin API.

use std::sync::Arc;

use tracing::debug;

use scoutbase_core::error::ScoutbaseError;
use scoutbase_core::query::{FilterOp, QuerySpec};
use scoutbase_core::traits::{AuthProvider, BackendClient};
use scoutbase_core::types::{MemberRecord, Profile};

const TABLE: &str = "profiles";

/// Read-side directory of registered members.
pub struct UserDirectory {
    backend: Arc<dyn BackendClient + Send + Sync>,
    auth: Arc<dyn AuthProvider + Send + Sync>,
}

impl UserDirectory {
    pub fn new(
        backend: Arc<dyn BackendClient + Send + Sync>,
        auth: Arc<dyn AuthProvider + Send + Sync>,
    ) -> Self {
        Self { backend, auth }
    }

    /// Every profile joined with its email address.
    ///
    /// Runs exactly one table read and one batched email lookup, no matter
    /// how many members exist. Members the auth service has no address for
    /// come back with an empty email rather than dropping out.
    pub async fn members(&self) -> Result<Vec<MemberRecord>, ScoutbaseError> {
        let query = QuerySpec::table(TABLE);
        query.validate()?;
        let profiles = self
            .backend
            .select(&query)
            .await?
            .into_iter()
            .map(decode_profile)
            .collect::<Result<Vec<_>, _>>()?;

        let ids: Vec<String> = profiles.iter().map(|p| p.user_id.clone()).collect();
        let mut emails = self.auth.emails_for(&ids).await?;
        debug!(members = profiles.len(), "resolved member directory");

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let email = emails.remove(&profile.user_id).unwrap_or_default();
                MemberRecord { profile, email }
            })
            .collect())
    }

    /// Whether the given user's profile carries the admin role.
    pub async fn is_admin(&self, user_id: &str) -> Result<bool, ScoutbaseError> {
        let query = QuerySpec::table(TABLE)
            .filter("user_id", FilterOp::Eq, user_id)
            .limit(1);
        query.validate()?;
        let rows = self.backend.select(&query).await?;
        match rows.into_iter().next() {
            Some(row) => Ok(decode_profile(row)?.is_admin()),
            None => Ok(false),
        }
    }
}

fn decode_profile(row: serde_json::Value) -> Result<Profile, ScoutbaseError> {
    serde_json::from_value(row).map_err(|e| ScoutbaseError::Backend {
        message: "profile row did not match the expected shape".into(),
        source: Some(Box::new(e)),
    })
}
