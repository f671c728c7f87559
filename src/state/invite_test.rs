use super::*;
use crate::net::types::UserPublic;

fn inviter(username: &str, nickname: Option<&str>) -> UserPublic {
    UserPublic {
        id: 7,
        username: username.to_owned(),
        nickname: nickname.map(ToOwned::to_owned),
        avatar: None,
        bio: None,
        level: 5,
        role: "senior".to_owned(),
        created_at: "2024-06-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Length gate
// =============================================================

#[test]
fn five_character_code_is_too_short() {
    assert!(too_short("ABCDE"));
}

#[test]
fn six_character_code_is_long_enough() {
    assert!(!too_short("ABCDEF"));
}

#[test]
fn default_status_is_unchecked_and_invalid() {
    let status = InviteStatus::default();
    assert!(!status.checked);
    assert!(!status.valid);
}

// =============================================================
// Validation outcomes
// =============================================================

#[test]
fn from_validation_accepts_valid_code_with_inviter() {
    let status = InviteStatus::from_validation(
        "ABCDEF",
        InviteCodeValidation {
            valid: true,
            message: "OK".to_owned(),
            inviter: Some(inviter("alice", None)),
        },
    );
    assert!(status.checked);
    assert!(status.valid);
    assert_eq!(status.message, "OK");
    assert_eq!(status.inviter_name.as_deref(), Some("alice"));
}

#[test]
fn from_validation_prefers_inviter_nickname() {
    let status = InviteStatus::from_validation(
        "ABCDEF",
        InviteCodeValidation {
            valid: true,
            message: "OK".to_owned(),
            inviter: Some(inviter("alice", Some("Mentor Alice"))),
        },
    );
    assert_eq!(status.inviter_name.as_deref(), Some("Mentor Alice"));
}

#[test]
fn from_validation_keeps_rejection_message() {
    let status = InviteStatus::from_validation(
        "EXPIRED1",
        InviteCodeValidation {
            valid: false,
            message: "Invite code exhausted".to_owned(),
            inviter: None,
        },
    );
    assert!(status.checked);
    assert!(!status.valid);
    assert_eq!(status.message, "Invite code exhausted");
}

#[test]
fn check_failed_is_distinct_from_a_rejected_code() {
    let status = InviteStatus::check_failed("ABCDEF");
    assert!(status.checked);
    assert!(!status.valid);
    assert_eq!(status.message, CHECK_FAILED_MESSAGE);
}

// =============================================================
// Submission gating is keyed to the exact code
// =============================================================

#[test]
fn allows_submit_only_for_the_checked_code() {
    let status = InviteStatus::from_validation(
        "ABCDEF",
        InviteCodeValidation { valid: true, message: "OK".to_owned(), inviter: None },
    );
    assert!(status.allows_submit("ABCDEF"));
    // Editing the input after a successful check un-validates the form.
    assert!(!status.allows_submit("ABCDEG"));
    assert!(!status.allows_submit(""));
}

#[test]
fn invalid_result_never_allows_submit() {
    let status = InviteStatus::from_validation(
        "ABCDEF",
        InviteCodeValidation { valid: false, message: "bad".to_owned(), inviter: None },
    );
    assert!(!status.allows_submit("ABCDEF"));
}
