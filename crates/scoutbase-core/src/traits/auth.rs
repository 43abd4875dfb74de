// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Auth provider trait wrapping the hosted identity service.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ScoutbaseError;
use crate::types::{AuthSession, Credentials, ProfileUpdate};

/// The hosted identity service: session retrieval, credential flows, and
/// profile maintenance.
#[async_trait]
pub trait AuthProvider {
    /// Returns the active session, if any.
    async fn session(&self) -> Result<Option<AuthSession>, ScoutbaseError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, ScoutbaseError>;

    async fn sign_up(
        &self,
        credentials: &Credentials,
        display_name: &str,
    ) -> Result<AuthSession, ScoutbaseError>;

    async fn sign_out(&self) -> Result<(), ScoutbaseError>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ScoutbaseError>;

    async fn reset_password(&self, email: &str) -> Result<(), ScoutbaseError>;

    /// Resolves emails for a batch of user ids in a single call.
    ///
    /// Directory listings must use this instead of a per-user lookup loop;
    /// ids unknown to the provider are simply absent from the result.
    async fn emails_for(
        &self,
        user_ids: &[String],
    ) -> Result<HashMap<String, String>, ScoutbaseError>;
}
