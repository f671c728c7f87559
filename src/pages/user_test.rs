use super::*;

#[test]
fn parse_user_id_accepts_numeric_ids() {
    assert_eq!(parse_user_id(Some("42".to_owned())), Some(42));
}

#[test]
fn parse_user_id_rejects_garbage() {
    assert_eq!(parse_user_id(Some("forty-two".to_owned())), None);
    assert_eq!(parse_user_id(None), None);
}
