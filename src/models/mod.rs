/// # Health Status Response
///
/// Operational status of the service with the time of the check.
/// See [`HealthResponse`](crate::models::health::HealthResponse).
pub mod health;

/// # User Records
///
/// The fixed, read-only user directory served by `GET /api/users`.
pub mod user;

pub use health::HealthResponse;
pub use user::User;
