use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Session Router Module
///
/// Defines the two lenient probe endpoints the console calls on page load.
///
/// Access Control Strategy:
/// No rejecting middleware is layered here on purpose. Both handlers take the
/// total `Identity` extractor and fold the anonymous case into a benign
/// result (`false` / `null`), because their consumers are conditional UI
/// renders. Data access is never granted on the strength of these answers —
/// the `/admin` module re-runs the guard on every request.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        // GET /session/user
        // Returns the caller's own record unfiltered, or null without a valid session.
        // Any authenticated identity may read its own record; no role check.
        .route("/session/user", get(handlers::get_current_user))
        // GET /session/is-admin
        // Boolean probe for the admin console gate. Never fails.
        .route("/session/is-admin", get(handlers::is_admin))
}
