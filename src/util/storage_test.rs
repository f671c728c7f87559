use super::*;

// Native test builds have no browser storage, which is exactly the
// non-interactive context the store must guard: reads report no token and
// writes are no-ops rather than panics.

#[test]
fn token_is_absent_outside_the_browser() {
    assert_eq!(token(), None);
}

#[test]
fn writes_are_noops_outside_the_browser() {
    set_token("tok-123");
    assert_eq!(token(), None);
    clear_token();
    assert_eq!(token(), None);
}
