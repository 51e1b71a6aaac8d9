use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness payload returned by `GET /health`.
///
/// `status` is always `"UP"` while the process can answer requests, and
/// `timestamp` is the UTC wall-clock time of the check in RFC 3339 form.
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: String,
    #[schema(example = "2024-03-10T15:30:45.123456789+00:00")]
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
