use crate::{
    AppState,
    auth::{Identity, require_role},
    error::ApiError,
    models::{AdminUserStats, Role, SetUserRoleRequest, User},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

// --- Handlers ---

/// is_admin
///
/// [Session Probe] Answers "should the UI show the admin console?".
///
/// *Policy*: deliberately lenient — an anonymous caller, a dangling identity,
/// or a non-admin all yield `false`; the endpoint never fails. This gates UI
/// rendering only; the `/admin` routes re-check authorization on every call,
/// so nothing is protected by this answer alone.
#[utoipa::path(
    get,
    path = "/session/is-admin",
    responses((status = 200, description = "Admin flag for the current session", body = bool))
)]
pub async fn is_admin(identity: Identity, State(state): State<AppState>) -> Json<bool> {
    let Some(user_id) = identity.user_id() else {
        return Json(false);
    };

    let admin = state
        .repo
        .get_user(user_id)
        .await
        .map(|user| user.is_admin())
        .unwrap_or(false);

    Json(admin)
}

/// get_current_user
///
/// [Session Probe] Returns the caller's own record, unfiltered. Any
/// authenticated identity may read its own record — no role check.
///
/// *Policy*: lenient like `is_admin`: no session (or no record behind the
/// session) yields `null` rather than an error, because the console uses this
/// to decide what to render, not to gate data access.
#[utoipa::path(
    get,
    path = "/session/user",
    responses((status = 200, description = "The caller's own record, or null", body = Option<User>))
)]
pub async fn get_current_user(
    identity: Identity,
    State(state): State<AppState>,
) -> Json<Option<User>> {
    let Some(user_id) = identity.user_id() else {
        return Json(None);
    };

    Json(state.repo.get_user(user_id).await)
}

/// get_all_users
///
/// [Admin Route] Lists every user record in the store, in store-native order
/// (ordering is not part of the contract).
///
/// *Authorization*: hard-fails through the guard — 401 without a valid
/// session, 403 without the admin role.
#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_all_users(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, ApiError> {
    require_role(&identity, Role::Admin, &state.repo).await?;
    Ok(Json(state.repo.get_all_users().await))
}

/// set_user_role
///
/// [Admin Route] Patches the target record's `role` field — and only that
/// field. Fire-and-forget: success carries no body.
///
/// *Authorization*: the guard checks the *caller*; the payload's closed `Role`
/// enum constrains the new value to the two known literals (anything else is
/// rejected at deserialization).
///
/// *Policy*: an admin may not change their own role. This keeps the API from
/// ever reaching a zero-admin state via self-demotion.
#[utoipa::path(
    put,
    path = "/admin/users/{id}/role",
    params(("id" = Uuid, Path, description = "Target user ID")),
    request_body = SetUserRoleRequest,
    responses(
        (status = 204, description = "Role updated"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin, or own role"),
        (status = 404, description = "Target user not found")
    )
)]
pub async fn set_user_role(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<SetUserRoleRequest>,
) -> Result<StatusCode, ApiError> {
    let caller = require_role(&identity, Role::Admin, &state.repo).await?;

    if caller.id == user_id {
        return Err(ApiError::Forbidden);
    }

    if state.repo.set_user_role(user_id, payload.role).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        // rows_affected == 0: the target id has no record behind it.
        Err(ApiError::NotFound)
    }
}

/// get_admin_stats
///
/// [Admin Route] Retrieves the user counters for the dashboard cards.
#[utoipa::path(
    get,
    path = "/admin/stats",
    responses(
        (status = 200, description = "User counters", body = AdminUserStats),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_admin_stats(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<AdminUserStats>, ApiError> {
    require_role(&identity, Role::Admin, &state.repo).await?;
    Ok(Json(state.repo.get_stats().await))
}
