//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<AuthState>` context from `App`; route guards
//! and user-aware components read it, and only the operations in this module
//! write it.
//!
//! DESIGN
//! ======
//! Each resolve attempt is tagged with a generation counter. A completed
//! profile fetch applies only while its generation is still current, so a
//! slow response arriving after a logout (or a newer login) is discarded
//! instead of overwriting authoritative state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::{RegisterData, UserProfile};
use crate::util::storage;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    /// The resolved profile, or `None` when anonymous.
    pub user: Option<UserProfile>,
    /// True only while the initial resolve or a refresh is in flight.
    pub loading: bool,
    generation: u64,
}

impl Default for AuthState {
    /// The unresolved boot state: no user yet, resolve pending.
    fn default() -> Self {
        Self { user: None, loading: true, generation: 0 }
    }
}

impl AuthState {
    /// Start a resolve attempt and return its generation tag.
    pub fn begin_resolve(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply the outcome of a resolve attempt.
    ///
    /// Returns `false` (leaving state untouched) when `generation` is no
    /// longer current, i.e. a logout or newer resolve superseded it.
    pub fn apply_resolved(&mut self, generation: u64, user: Option<UserProfile>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.user = user;
        self.loading = false;
        true
    }

    /// Drop to anonymous immediately, invalidating any in-flight resolve.
    pub fn reset_anonymous(&mut self) {
        self.generation += 1;
        self.user = None;
        self.loading = false;
    }

    /// Whether a profile is currently loaded.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Re-resolve the session from the stored token.
///
/// With no token stored this settles to anonymous without touching the
/// network. With a token, a successful `/users/me` fetch loads the profile;
/// any failure is treated as "token is invalid": the token is dropped and
/// the session settles to anonymous. That is the one swallowed error path.
pub async fn refresh_user(auth: RwSignal<AuthState>) {
    if storage::token().is_none() {
        auth.update(AuthState::reset_anonymous);
        return;
    }
    let generation = auth
        .try_update(AuthState::begin_resolve)
        .unwrap_or_default();
    match api::get_current_user().await {
        Ok(envelope) => {
            auth.update(|state| {
                state.apply_resolved(generation, Some(envelope.data));
            });
        }
        Err(err) => {
            let applied = auth
                .try_update(|state| state.apply_resolved(generation, None))
                .unwrap_or(false);
            // Only the still-authoritative resolve may drop the token; a
            // superseded one could race a newer login's credential.
            if applied {
                leptos::logging::warn!("session resolve failed, dropping token: {err}");
                storage::clear_token();
            }
        }
    }
}

/// Authenticate and establish a session.
///
/// Stores the returned token byte-for-byte, then re-runs the resolve
/// sequence so subscribers observe either a loaded profile or a cleared
/// session, never a half-applied one. On failure nothing is stored.
///
/// # Errors
///
/// Propagates the login exchange's [`ApiError`] for the form to display.
pub async fn login(
    auth: RwSignal<AuthState>,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    let token = api::login(username, password).await?;
    storage::set_token(&token.access_token);
    refresh_user(auth).await;
    Ok(())
}

/// Create an account, then establish a session with the same credentials.
///
/// Registration does not itself yield a token, so a successful register is
/// followed by a normal login. A failed register persists nothing and never
/// reaches the login step.
///
/// # Errors
///
/// Propagates the first failing step's [`ApiError`].
pub async fn register(auth: RwSignal<AuthState>, data: &RegisterData) -> Result<(), ApiError> {
    api::register(data).await?;
    login(auth, &data.username, &data.password).await
}

/// End the session synchronously.
///
/// The token is removed and the state is anonymous before this returns;
/// any in-flight resolve is invalidated by the generation bump.
pub fn logout(auth: RwSignal<AuthState>) {
    storage::clear_token();
    auth.update(AuthState::reset_anonymous);
}
