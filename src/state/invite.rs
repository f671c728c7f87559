//! Invite-code gate state for the registration form.
//!
//! DESIGN
//! ======
//! A validation result is keyed to the exact code string it was computed
//! for. Editing the input after a successful check therefore un-validates
//! the form automatically; a bare boolean flag would let a stale `valid`
//! approve a code the backend never saw.

#[cfg(test)]
#[path = "invite_test.rs"]
mod invite_test;

use leptos::prelude::{RwSignal, Set};

use crate::net::api;
use crate::net::types::InviteCodeValidation;

/// Codes shorter than this are rejected locally without a network call.
pub const MIN_CODE_LEN: usize = 6;

/// Message shown when the check itself failed, as opposed to the code being
/// rejected. Distinguishes a connectivity problem from a genuinely bad code.
pub const CHECK_FAILED_MESSAGE: &str = "Verification failed, please check your connection.";

/// Outcome of the most recent invite-code check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InviteStatus {
    /// Whether a check has completed for `code`.
    pub checked: bool,
    /// Whether the backend accepted `code`.
    pub valid: bool,
    /// Verdict message to show under the input.
    pub message: String,
    /// Display name of the code's owner, when the code resolved to one.
    pub inviter_name: Option<String>,
    /// The exact code this result applies to.
    pub code: String,
}

impl InviteStatus {
    /// Result for a check that could not be completed (network failure).
    pub fn check_failed(code: &str) -> Self {
        Self {
            checked: true,
            valid: false,
            message: CHECK_FAILED_MESSAGE.to_owned(),
            inviter_name: None,
            code: code.to_owned(),
        }
    }

    /// Result from a completed backend validation.
    pub fn from_validation(code: &str, validation: InviteCodeValidation) -> Self {
        Self {
            checked: true,
            valid: validation.valid,
            message: validation.message,
            inviter_name: validation
                .inviter
                .map(|inviter| inviter.display_name().to_owned()),
            code: code.to_owned(),
        }
    }

    /// Whether submission may proceed with `current_code` in the form.
    ///
    /// True only when the last check succeeded *and* the input still holds
    /// the code that was checked.
    pub fn allows_submit(&self, current_code: &str) -> bool {
        self.valid && self.code == current_code
    }
}

/// Whether a code is too short to be worth sending to the backend.
pub fn too_short(code: &str) -> bool {
    code.chars().count() < MIN_CODE_LEN
}

/// Run the gate for `code` and publish the outcome to `status`.
///
/// Short codes short-circuit to the unchecked state without a network call.
/// A transport failure reports [`CHECK_FAILED_MESSAGE`] rather than
/// pretending the code was rejected.
pub async fn check_invite_code(code: String, status: RwSignal<InviteStatus>) {
    if too_short(&code) {
        status.set(InviteStatus::default());
        return;
    }
    match api::validate_invite_code(&code).await {
        Ok(validation) => status.set(InviteStatus::from_validation(&code, validation)),
        Err(err) => {
            leptos::logging::warn!("invite-code check failed: {err}");
            status.set(InviteStatus::check_failed(&code));
        }
    }
}
