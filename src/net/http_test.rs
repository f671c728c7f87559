use super::*;

// =============================================================
// Endpoint construction
// =============================================================

#[test]
fn endpoint_prepends_base_path() {
    assert_eq!(endpoint("/users/me"), format!("{API_BASE}/users/me"));
}

// =============================================================
// Error normalization
// =============================================================

#[test]
fn error_body_detail_field_is_surfaced_verbatim() {
    let body = serde_json::json!({ "detail": "Incorrect username or password" });
    let err = ApiError::from_error_body(401, Some(body));
    assert_eq!(err.message, "Incorrect username or password");
    assert_eq!(err.status, Some(401));
}

#[test]
fn error_body_message_field_is_surfaced_verbatim() {
    let body = serde_json::json!({ "code": 1, "message": "Invite code exhausted" });
    let err = ApiError::from_error_body(400, Some(body));
    assert_eq!(err.message, "Invite code exhausted");
}

#[test]
fn unparsable_error_body_falls_back_to_status() {
    let err = ApiError::from_error_body(502, None);
    assert_eq!(err.message, "request failed: 502");
    assert_eq!(err.status, Some(502));
}

#[test]
fn non_string_detail_falls_back_to_status() {
    let body = serde_json::json!({ "detail": [{"loc": ["body", "email"]}] });
    let err = ApiError::from_error_body(422, Some(body));
    assert_eq!(err.message, "request failed: 422");
}

#[test]
fn transport_errors_carry_no_status() {
    let err = ApiError::transport("connection refused");
    assert_eq!(err.status, None);
    assert_eq!(err.to_string(), "connection refused");
}
