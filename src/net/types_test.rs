use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_uses_snake_case_wire_names() {
    assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
    assert_eq!(serde_json::from_str::<Role>("\"super_admin\"").unwrap(), Role::SuperAdmin);
    assert_eq!(serde_json::to_string(&Role::Senior).unwrap(), "\"senior\"");
}

// =============================================================
// Envelope and profile shapes
// =============================================================

#[test]
fn user_profile_envelope_parses_backend_payload() {
    let payload = serde_json::json!({
        "code": 0,
        "message": "success",
        "data": {
            "id": 3,
            "username": "bob",
            "email": "bob@example.com",
            "nickname": null,
            "avatar": null,
            "bio": "hello",
            "role": "admin",
            "level": 7,
            "experience": 1520,
            "points": 88,
            "total_points_earned": 400,
            "invite_code": "BOBCODE",
            "invite_quota": 3,
            "is_active": true,
            "is_verified": false,
            "created_at": "2024-12-01T10:00:00Z",
            "last_login_at": "2025-01-02T08:30:00Z",
            "invited_count": 1
        }
    });
    let envelope: ApiResponse<UserProfile> = serde_json::from_value(payload).unwrap();
    assert_eq!(envelope.code, 0);
    assert_eq!(envelope.data.username, "bob");
    assert_eq!(envelope.data.role, Role::Admin);
    assert_eq!(envelope.data.invited_count, 1);
}

#[test]
fn list_envelope_parses_pagination_fields() {
    let payload = serde_json::json!({
        "code": 0,
        "message": "success",
        "data": [{
            "id": 9,
            "username": "carol",
            "nickname": "C",
            "avatar": null,
            "bio": null,
            "level": 2,
            "role": "user",
            "created_at": "2025-03-01T00:00:00Z"
        }],
        "total": 37,
        "page": 1,
        "page_size": 10
    });
    let envelope: ApiListResponse<UserPublic> = serde_json::from_value(payload).unwrap();
    assert_eq!(envelope.total, 37);
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.data[0].display_name(), "C");
}

#[test]
fn token_parses_login_response() {
    let token: Token =
        serde_json::from_str(r#"{"access_token":"abc.def.ghi","token_type":"bearer"}"#).unwrap();
    assert_eq!(token.access_token, "abc.def.ghi");
    assert_eq!(token.token_type, "bearer");
}

// =============================================================
// Profile patch serialization
// =============================================================

#[test]
fn profile_patch_omits_unset_fields() {
    let patch = ProfilePatch { nickname: Some("New Name".to_owned()), ..ProfilePatch::default() };
    let body = serde_json::to_value(&patch).unwrap();
    assert_eq!(body, serde_json::json!({ "nickname": "New Name" }));
}

#[test]
fn empty_profile_patch_serializes_to_empty_object() {
    let body = serde_json::to_value(ProfilePatch::default()).unwrap();
    assert_eq!(body, serde_json::json!({}));
}

// =============================================================
// Display names
// =============================================================

#[test]
fn display_name_falls_back_to_username() {
    let user = UserPublic {
        id: 1,
        username: "dora".to_owned(),
        nickname: None,
        avatar: None,
        bio: None,
        level: 1,
        role: "user".to_owned(),
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    };
    assert_eq!(user.display_name(), "dora");
}
