use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// ApiError
///
/// The full failure taxonomy of the guarded operation surface. All three
/// outcomes are terminal permission/lookup decisions, not transient faults:
/// callers must not auto-retry any of them.
///
/// The two `/session` probe endpoints never produce these — they swallow the
/// unauthenticated case into a benign `false`/`null` because they gate UI
/// rendering, not data access. That asymmetry is a deliberate policy choice,
/// not an oversight; do not unify the two behaviors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No valid session: identity missing, or no record behind the identity.
    #[error("not authenticated")]
    Unauthenticated,
    /// Valid session, insufficient role.
    #[error("insufficient permissions")]
    Forbidden,
    /// The mutation target does not exist in the store.
    #[error("resource not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
