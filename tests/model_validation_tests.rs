use doofs_console::models::{Role, SetUserRoleRequest, User};
use uuid::Uuid;

// --- Tests ---

#[test]
fn test_role_serializes_to_lowercase_literals() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
}

#[test]
fn test_role_is_a_closed_enum_on_the_write_path() {
    // The two known literals deserialize.
    let req: SetUserRoleRequest = serde_json::from_str(r#"{ "role": "admin" }"#).unwrap();
    assert_eq!(req.role, Role::Admin);

    // Anything else is rejected, not silently accepted. This is the type-level
    // replacement for the store's nominal two-literal constraint.
    assert!(serde_json::from_str::<SetUserRoleRequest>(r#"{ "role": "superadmin" }"#).is_err());
    assert!(serde_json::from_str::<SetUserRoleRequest>(r#"{ "role": "" }"#).is_err());
    assert!(serde_json::from_str::<SetUserRoleRequest>(r#"{ "role": null }"#).is_err());
}

#[test]
fn test_stored_role_mapping_fails_closed() {
    assert_eq!(Role::from_stored(Some("admin")), Role::Admin);
    assert_eq!(Role::from_stored(Some("user")), Role::User);

    // A missing or stray stored value is a non-admin, never an implicit grant.
    assert_eq!(Role::from_stored(None), Role::User);
    assert_eq!(Role::from_stored(Some("superadmin")), Role::User);
    assert_eq!(Role::from_stored(Some("")), Role::User);
}

#[test]
fn test_user_json_shape_matches_console_expectations() {
    let user = User {
        id: Uuid::from_u128(7),
        email: Some("c@doofs.tech".to_string()),
        name: None,
        image: None,
        role: Role::Admin,
    };

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["role"], "admin");
    assert_eq!(value["email"], "c@doofs.tech");
    // Optional profile fields serialize as explicit nulls for the frontend.
    assert!(value["name"].is_null());

    // And a record round-trips through the wire format unchanged.
    let back: User = serde_json::from_value(value).unwrap();
    assert_eq!(back, user);
}

#[test]
fn test_user_default_is_not_admin() {
    // Default/blank records must land on the unprivileged side.
    assert!(!User::default().is_admin());
    assert_eq!(Role::default(), Role::User);
}
