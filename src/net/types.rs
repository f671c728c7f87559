//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend response schemas so serde
//! round-trips stay lossless and page code can remain shape-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role tiers, ordered by privilege.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular member.
    #[default]
    User,
    /// Senior member with elevated community standing.
    Senior,
    /// Platform administrator.
    Admin,
    /// Administrator with full control, including admin management.
    SuperAdmin,
}

/// A full account record as returned by registration and profile updates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login name, unique across the platform.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Optional display name shown in place of the username.
    pub nickname: Option<String>,
    /// Avatar image URL, if set.
    pub avatar: Option<String>,
    /// Short self-description, if set.
    pub bio: Option<String>,
    /// Account role tier.
    pub role: Role,
    /// Current level derived from accumulated experience.
    pub level: i32,
    /// Accumulated experience points.
    pub experience: i32,
    /// Spendable points balance.
    pub points: i32,
    /// Lifetime points earned, never decreasing.
    pub total_points_earned: i32,
    /// This user's own invite code for inviting others.
    pub invite_code: String,
    /// Remaining number of registrations this user's code may gate.
    pub invite_quota: i32,
    /// Whether the account is enabled.
    pub is_active: bool,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 timestamp of the most recent login, if any.
    pub last_login_at: Option<String>,
}

/// The authenticated user's own profile as returned by `/users/me`.
///
/// A superset of [`User`]; replaced wholesale on every session refresh,
/// never patched in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: i64,
    /// Login name, unique across the platform.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Optional display name shown in place of the username.
    pub nickname: Option<String>,
    /// Avatar image URL, if set.
    pub avatar: Option<String>,
    /// Short self-description, if set.
    pub bio: Option<String>,
    /// Account role tier.
    pub role: Role,
    /// Current level derived from accumulated experience.
    pub level: i32,
    /// Accumulated experience points.
    pub experience: i32,
    /// Spendable points balance.
    pub points: i32,
    /// Lifetime points earned, never decreasing.
    pub total_points_earned: i32,
    /// This user's own invite code for inviting others.
    pub invite_code: String,
    /// Remaining number of registrations this user's code may gate.
    pub invite_quota: i32,
    /// Whether the account is enabled.
    pub is_active: bool,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 timestamp of the most recent login, if any.
    pub last_login_at: Option<String>,
    /// Number of users who registered through this user's invite code.
    pub invited_count: i32,
}

impl UserProfile {
    /// Name shown in headers and badges: nickname when set, else username.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }
}

/// Public subset of a user record, safe to show to anyone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPublic {
    /// Unique user identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Optional display name.
    pub nickname: Option<String>,
    /// Avatar image URL, if set.
    pub avatar: Option<String>,
    /// Short self-description, if set.
    pub bio: Option<String>,
    /// Current level.
    pub level: i32,
    /// Role name as a plain string (the public view is not role-gated).
    pub role: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

impl UserPublic {
    /// Name shown in lists: nickname when set, else username.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }
}

/// Registration submission payload. Write-once; not retained after submit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterData {
    /// Requested login name.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
    /// The invite code gating this registration.
    pub invite_code: String,
}

/// Bearer credential returned by the login exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Opaque bearer token; stored byte-for-byte in the token store.
    pub access_token: String,
    /// Token scheme, always `"bearer"`.
    pub token_type: String,
}

/// The authenticated user's invite-code details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InviteCodeInfo {
    /// The code itself.
    pub code: String,
    /// How many more registrations this code may gate.
    pub remaining_quota: i32,
    /// Users who registered through this code.
    pub invited_users: Vec<UserPublic>,
}

/// Result of a pre-registration invite-code check.
///
/// Transient; computed per validation attempt and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InviteCodeValidation {
    /// Whether the code currently gates a registration.
    pub valid: bool,
    /// Human-readable verdict from the backend.
    pub message: String,
    /// Owner of the code, when it resolves to one.
    pub inviter: Option<UserPublic>,
}

/// Points summary for the authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsSummary {
    /// Spendable points balance.
    pub points: i32,
    /// Lifetime points earned.
    pub total_earned: i32,
    /// Current level.
    pub level: i32,
    /// Accumulated experience points.
    pub experience: i32,
}

/// Partial profile update for `PUT /users/me`.
///
/// Unset fields are omitted from the request body and left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// New avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// New self-description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Standard single-object response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Application status code (0 on success).
    pub code: i32,
    /// Human-readable status message.
    pub message: String,
    /// The payload.
    pub data: T,
}

/// Standard paginated list response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiListResponse<T> {
    /// Application status code (0 on success).
    pub code: i32,
    /// Human-readable status message.
    pub message: String,
    /// The page of items.
    pub data: Vec<T>,
    /// Total items across all pages.
    pub total: i64,
    /// Current page number, 1-based.
    pub page: i32,
    /// Items per page.
    pub page_size: i32,
}
