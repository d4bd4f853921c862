use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Application Schemas (Mapped to Database) ---

/// Role
///
/// The RBAC field as a closed enum. The store nominally constrains the column
/// to the two literals, but nothing stops a third value being written
/// out-of-band, so the type system is the real boundary: every write path
/// deserializes into this enum (unknown values are rejected with 422), and the
/// read path maps anything unrecognized to `Role::User` (fail-closed — an
/// ambiguous record is never treated as admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// The canonical column value for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Maps a raw stored value back to the enum.
    ///
    /// Absent or unrecognized values decode as `Role::User`: a record without
    /// a valid role is a non-admin, never an implicit grant.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("admin") => Role::Admin,
            _ => Role::User,
        }
    }
}

/// User
///
/// The canonical identity record from the `public.users` table. This is the
/// sole durable entity of the console: the guard reads it, and the one
/// mutation patches its `role` field.
///
/// `id` is assigned by the external sign-up flow and immutable here; the
/// profile fields are optional because the auth provider does not guarantee
/// any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    // Avatar URL, if the auth provider supplied one.
    pub image: Option<String>,
    pub role: Role,
}

impl User {
    /// True iff the record carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// --- Request Payloads (Input Schemas) ---

/// SetUserRoleRequest
///
/// Input payload for the role-change mutation (PUT /admin/users/{id}/role).
/// Deserializing through `Role` is what enforces the closed-enum invariant on
/// the write path.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SetUserRoleRequest {
    pub role: Role,
}

/// --- Dashboard Schemas (Output) ---

/// AdminUserStats
///
/// Output schema for the dashboard counters (GET /admin/stats): the three
/// cards the console renders above the user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct AdminUserStats {
    pub total_users: i64,
    /// Records with `role = 'admin'`.
    pub admin_users: i64,
    /// Everyone else, including records with no role set.
    pub regular_users: i64,
}
