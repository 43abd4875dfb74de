// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account flows over the auth provider.
//!
//! Every failure is surfaced through the notification sink with the
//! provider's message verbatim, then handed back to the caller.

use std::sync::Arc;

use tracing::info;

use scoutbase_core::error::ScoutbaseError;
use scoutbase_core::traits::{AuthProvider, NotificationSink};
use scoutbase_core::types::{AuthSession, Credentials, Notification, ProfileUpdate};

pub struct AccountService {
    auth: Arc<dyn AuthProvider + Send + Sync>,
    notifier: Arc<dyn NotificationSink + Send + Sync>,
}

impl AccountService {
    pub fn new(
        auth: Arc<dyn AuthProvider + Send + Sync>,
        notifier: Arc<dyn NotificationSink + Send + Sync>,
    ) -> Self {
        Self { auth, notifier }
    }

    /// The active session, if any.
    pub async fn current_session(&self) -> Result<Option<AuthSession>, ScoutbaseError> {
        self.auth.session().await
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, ScoutbaseError> {
        match self.auth.sign_in(credentials).await {
            Ok(session) => {
                info!(user = %session.user.id, "signed in");
                Ok(session)
            }
            Err(e) => Err(self.surface("Sign in failed", e).await),
        }
    }

    pub async fn sign_up(
        &self,
        credentials: &Credentials,
        display_name: &str,
    ) -> Result<AuthSession, ScoutbaseError> {
        match self.auth.sign_up(credentials, display_name).await {
            Ok(session) => {
                info!(user = %session.user.id, "account created");
                Ok(session)
            }
            Err(e) => Err(self.surface("Sign up failed", e).await),
        }
    }

    pub async fn sign_out(&self) -> Result<(), ScoutbaseError> {
        match self.auth.sign_out().await {
            Ok(()) => {
                info!("signed out");
                Ok(())
            }
            Err(e) => Err(self.surface("Sign out failed", e).await),
        }
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ScoutbaseError> {
        match self.auth.update_profile(update).await {
            Ok(()) => Ok(()),
            Err(e) => Err(self.surface("Failed to update profile", e).await),
        }
    }

    /// Asks the provider to start a password reset for the given address.
    pub async fn reset_password(&self, email: &str) -> Result<(), ScoutbaseError> {
        match self.auth.reset_password(email).await {
            Ok(()) => {
                self.notifier
                    .notify(Notification::info(
                        "Password reset requested",
                        format!("Check {email} for the reset link"),
                    ))
                    .await;
                Ok(())
            }
            Err(e) => Err(self.surface("Password reset failed", e).await),
        }
    }

    async fn surface(&self, title: &str, error: ScoutbaseError) -> ScoutbaseError {
        self.notifier
            .notify(Notification::error(title, error.to_string()))
            .await;
        error
    }
}
