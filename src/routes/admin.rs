use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, put},
};

/// Admin Router Module
///
/// Defines the routes exclusively accessible to users with the 'admin' role.
///
/// Access Control:
/// Every handler in this module passes the resolved `Identity` through
/// `require_role(.., Role::Admin, ..)` before touching the store. The guard is
/// the single choke point: no identity → 401, no record → 401, wrong role →
/// 403. Only an exact role match proceeds.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin/stats
        // Retrieves the dashboard counters (Total / Admin / Regular users).
        .route("/stats", get(handlers::get_admin_stats))
        // GET /admin/users
        // Lists ALL user records, in store-native order. Feeds the role
        // management table in the console.
        .route("/users", get(handlers::get_all_users))
        // PUT /admin/users/{id}/role
        // Patches the target's role field only. The payload is the closed
        // Role enum, so unknown role literals never reach the store.
        .route("/users/{id}/role", put(handlers::set_user_role))
}
