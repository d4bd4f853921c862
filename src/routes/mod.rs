/// Router Module Index
///
/// Organizes the application's routing logic into security-segregated modules.
/// Access policy is applied explicitly at the module level, preventing
/// accidental exposure of protected endpoints.
///
/// The split mirrors the two deliberate failure policies of the API:

/// Routes accessible to all callers (monitoring, load balancers).
pub mod public;

/// Session probe routes. These resolve the caller's identity but **never
/// reject**: an anonymous caller gets a benign `false`/`null` result. They
/// exist to gate UI rendering, not data.
pub mod session;

/// Routes restricted exclusively to users with the 'admin' role.
/// Every handler here hard-fails through the authorization guard.
pub mod admin;
