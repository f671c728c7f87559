use super::*;

#[test]
fn leaderboard_endpoint_carries_limit() {
    assert_eq!(leaderboard_endpoint(10), "/users/leaderboard?limit=10");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint(42), "/users/42");
}
