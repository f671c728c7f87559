use super::*;

fn sample_profile() -> UserProfile {
    UserProfile {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        nickname: Some("Alice".to_owned()),
        avatar: None,
        bio: None,
        role: crate::net::types::Role::User,
        level: 3,
        experience: 420,
        points: 120,
        total_points_earned: 300,
        invite_code: "ALICE1".to_owned(),
        invite_quota: 5,
        is_active: true,
        is_verified: true,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        last_login_at: None,
        invited_count: 2,
    }
}

// =============================================================
// Boot state
// =============================================================

#[test]
fn default_state_is_unresolved() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Resolve lifecycle
// =============================================================

#[test]
fn begin_resolve_sets_loading_and_returns_new_generation() {
    let mut state = AuthState::default();
    let first = state.begin_resolve();
    let second = state.begin_resolve();
    assert!(state.loading);
    assert!(second > first);
}

#[test]
fn apply_resolved_with_current_generation_loads_profile() {
    let mut state = AuthState::default();
    let generation = state.begin_resolve();
    assert!(state.apply_resolved(generation, Some(sample_profile())));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn apply_resolved_with_current_generation_settles_anonymous() {
    let mut state = AuthState::default();
    let generation = state.begin_resolve();
    assert!(state.apply_resolved(generation, None));
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

// =============================================================
// Superseded resolutions
// =============================================================

#[test]
fn stale_generation_is_discarded() {
    let mut state = AuthState::default();
    let stale = state.begin_resolve();
    let current = state.begin_resolve();
    assert!(!state.apply_resolved(stale, Some(sample_profile())));
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(state.apply_resolved(current, None));
}

#[test]
fn reset_anonymous_invalidates_in_flight_resolve() {
    let mut state = AuthState::default();
    let generation = state.begin_resolve();
    state.reset_anonymous();
    // The slow response lands after logout and must not resurrect the user.
    assert!(!state.apply_resolved(generation, Some(sample_profile())));
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn reset_anonymous_is_immediate() {
    let mut state = AuthState::default();
    let generation = state.begin_resolve();
    assert!(state.apply_resolved(generation, Some(sample_profile())));
    state.reset_anonymous();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
