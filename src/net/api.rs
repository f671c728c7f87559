//! Typed bindings for the auth and user endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each function maps one backend endpoint to request construction plus a
//! typed response shape, nothing more. Errors propagate unchanged from the
//! transport layer; callers decide recovery.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{self, ApiError};
use super::types::{
    ApiListResponse, ApiResponse, InviteCodeInfo, InviteCodeValidation, PointsSummary,
    ProfilePatch, RegisterData, Token, User, UserProfile, UserPublic,
};

fn leaderboard_endpoint(limit: u32) -> String {
    format!("/users/leaderboard?limit={limit}")
}

fn user_endpoint(user_id: i64) -> String {
    format!("/users/{user_id}")
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`]; a rejected invite code or a
/// taken username arrive here as non-2xx responses with backend messages.
pub async fn register(data: &RegisterData) -> Result<ApiResponse<User>, ApiError> {
    let body = serde_json::to_value(data).map_err(|e| ApiError::transport(e.to_string()))?;
    http::post("/auth/register", Some(body)).await
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// The exchange is form-encoded and carries no bearer header.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`].
pub async fn login(username: &str, password: &str) -> Result<Token, ApiError> {
    http::post_form("/auth/login", &[("username", username), ("password", password)]).await
}

/// Check an invite code via `POST /auth/validate-invite-code`.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`]. Note that a *rejected* code
/// is not an error: the backend answers 2xx with `valid: false`.
pub async fn validate_invite_code(code: &str) -> Result<InviteCodeValidation, ApiError> {
    let body = serde_json::json!({ "invite_code": code });
    http::post("/auth/validate-invite-code", Some(body)).await
}

/// Fetch the authenticated user's profile via `GET /users/me`.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`]; a rejected token arrives
/// here as a 401.
pub async fn get_current_user() -> Result<ApiResponse<UserProfile>, ApiError> {
    http::get("/users/me").await
}

/// Update the authenticated user's profile via `PUT /users/me`.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`].
pub async fn update_current_user(patch: &ProfilePatch) -> Result<ApiResponse<User>, ApiError> {
    let body = serde_json::to_value(patch).map_err(|e| ApiError::transport(e.to_string()))?;
    http::put("/users/me", Some(body)).await
}

/// Fetch the authenticated user's points summary via `GET /users/me/points`.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`].
pub async fn get_my_points() -> Result<ApiResponse<PointsSummary>, ApiError> {
    http::get("/users/me/points").await
}

/// Fetch the authenticated user's invite-code details via
/// `GET /users/me/invite-code`.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`].
pub async fn get_my_invite_code() -> Result<ApiResponse<InviteCodeInfo>, ApiError> {
    http::get("/users/me/invite-code").await
}

/// List users who registered through the authenticated user's invite code
/// via `GET /users/me/invited-users`.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`].
pub async fn get_my_invited_users() -> Result<ApiListResponse<UserPublic>, ApiError> {
    http::get("/users/me/invited-users").await
}

/// Fetch the top users by points via `GET /users/leaderboard`.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`].
pub async fn get_leaderboard(limit: u32) -> Result<ApiListResponse<UserPublic>, ApiError> {
    http::get(&leaderboard_endpoint(limit)).await
}

/// Fetch another user's public profile via `GET /users/{id}`.
///
/// # Errors
///
/// Propagates the transport-layer [`ApiError`].
pub async fn get_user_profile(user_id: i64) -> Result<ApiResponse<UserPublic>, ApiError> {
    http::get(&user_endpoint(user_id)).await
}
