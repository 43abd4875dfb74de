// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Scoutbase messaging core.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sentinel display label for just-written messages and previews.
pub const JUST_NOW: &str = "Just now";

/// Unique identifier for a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub String);

impl ConversationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Unique identifier for a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message: the signed-in user or the conversation counterpart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    User,
    Other,
}

/// A thread between the current user and one counterpart about one venue.
///
/// Conversations are seeded at store construction and never created or
/// deleted afterwards; sends and read-marking mutate them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    /// Display name of the counterpart in this thread.
    pub counterpart_name: String,
    /// Identifier of the venue the thread is about.
    pub venue_id: String,
    pub venue_name: String,
    /// Preview text of the most recently sent message.
    pub last_message: String,
    /// Display timestamp label ("2 hours ago", "Just now"). Not sortable.
    pub timestamp: String,
    /// True while the conversation holds messages the user has not viewed.
    pub unread: bool,
    /// Whether the counterpart owns the venue (vs. another inquirer).
    pub counterpart_is_owner: bool,
}

/// One timestamped text entry within a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender: SenderRole,
    /// Display name of the author, when it is not the current user.
    pub sender_name: Option<String>,
    pub content: String,
    /// Display timestamp label, mirroring [`Conversation::timestamp`].
    pub timestamp: String,
    pub read: bool,
    /// RFC 3339 creation instant, assigned by the store.
    pub created_at: String,
}

/// Input for sending a message: everything but the store-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDraft {
    pub conversation_id: ConversationId,
    pub sender: SenderRole,
    pub sender_name: Option<String>,
    pub content: String,
    pub timestamp: String,
    pub read: bool,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A user-facing notification (title + description + severity).
///
/// Display is delegated to the [`NotificationSink`](crate::NotificationSink)
/// implementation; the core only models the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

// --- Venue resource types ---

/// A bookable scout base listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    pub price_per_night: f64,
    pub description: String,
}

/// Input for creating a venue; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueDraft {
    pub owner_id: String,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    pub price_per_night: f64,
    pub description: String,
}

// --- Account and directory types ---

/// A user profile row from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    /// Single role string; `"admin"` is the only distinguished value.
    pub role: String,
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// A profile merged with the email held by the auth provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub profile: Profile,
    pub email: String,
}

/// Email/password credentials for sign-in and sign-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The authenticated user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// An active auth session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub access_token: String,
}

/// Partial profile update pushed to the auth provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_role_serializes_lowercase() {
        let json = serde_json::to_string(&SenderRole::User).unwrap();
        assert_eq!(json, r#""user""#);
        let json = serde_json::to_string(&SenderRole::Other).unwrap();
        assert_eq!(json, r#""other""#);
    }

    #[test]
    fn sender_role_display_and_parse_round_trip() {
        use std::str::FromStr;
        for role in [SenderRole::User, SenderRole::Other] {
            let s = role.to_string();
            assert_eq!(SenderRole::from_str(&s).unwrap(), role);
        }
    }

    #[test]
    fn conversation_id_display_matches_inner() {
        let id = ConversationId::from("1");
        assert_eq!(id.to_string(), "1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn notification_constructors_set_severity() {
        let info = Notification::info("Saved", "Your changes were saved");
        assert_eq!(info.severity, Severity::Info);
        let err = Notification::error("Failed", "Could not load conversations");
        assert_eq!(err.severity, Severity::Error);
    }

    #[test]
    fn profile_role_check() {
        let admin = Profile {
            user_id: "u1".into(),
            display_name: "Alex".into(),
            role: "admin".into(),
        };
        let member = Profile {
            user_id: "u2".into(),
            display_name: "Sam".into(),
            role: "member".into(),
        };
        assert!(admin.is_admin());
        assert!(!member.is_admin());
    }
}
