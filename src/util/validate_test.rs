use super::*;

#[test]
fn mismatched_passwords_are_rejected_first() {
    // Even a too-short password reports the mismatch before the length.
    assert_eq!(
        validate_registration("abc1234", "different", true),
        Err("The two passwords do not match.")
    );
}

#[test]
fn seven_character_password_is_too_short() {
    assert_eq!(
        validate_registration("abc1234", "abc1234", true),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn eight_character_password_passes_length_check() {
    assert_eq!(validate_registration("abcd1234", "abcd1234", true), Ok(()));
}

#[test]
fn terms_must_be_accepted() {
    assert_eq!(
        validate_registration("abcd1234", "abcd1234", false),
        Err("Please read and accept the terms of service and privacy policy first.")
    );
}
