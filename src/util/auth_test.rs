use super::*;
use crate::net::types::{Role, UserProfile};

fn signed_in() -> AuthState {
    let mut state = AuthState::default();
    let generation = state.begin_resolve();
    state.apply_resolved(
        generation,
        Some(UserProfile {
            id: 1,
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            nickname: None,
            avatar: None,
            bio: None,
            role: Role::User,
            level: 1,
            experience: 0,
            points: 0,
            total_points_earned: 0,
            invite_code: "ALICE1".to_owned(),
            invite_quota: 5,
            is_active: true,
            is_verified: true,
            created_at: "2025-01-01T00:00:00Z".to_owned(),
            last_login_at: None,
            invited_count: 0,
        }),
    );
    state
}

fn anonymous() -> AuthState {
    let mut state = AuthState::default();
    state.reset_anonymous();
    state
}

#[test]
fn unauth_redirect_fires_only_once_resolved_anonymous() {
    assert!(should_redirect_unauth(&anonymous()));
    assert!(!should_redirect_unauth(&AuthState::default()));
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn authed_redirect_fires_only_once_resolved_signed_in() {
    assert!(should_redirect_authed(&signed_in()));
    assert!(!should_redirect_authed(&AuthState::default()));
    assert!(!should_redirect_authed(&anonymous()));
}
