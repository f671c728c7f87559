//! Local registration-form validation.
//!
//! These checks never reach the network and surface immediately on submit.
//! Check order matters: mismatch is reported before length, and both before
//! the terms checkbox, so the user fixes fields top-down.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum password length accepted by the backend.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate the local-only parts of the registration form.
///
/// # Errors
///
/// Returns the first failing check's message: password mismatch, password
/// too short, or terms not accepted.
pub fn validate_registration(
    password: &str,
    confirm_password: &str,
    agree_terms: bool,
) -> Result<(), &'static str> {
    if password != confirm_password {
        return Err("The two passwords do not match.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if !agree_terms {
        return Err("Please read and accept the terms of service and privacy policy first.");
    }
    Ok(())
}
