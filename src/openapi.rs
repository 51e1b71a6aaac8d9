use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers and served at `/api-docs/openapi.json`.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Users: `GET /api/users`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::users::list_users,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::user::User
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Users", description = "Read-only user directory")
    ),
    info(
        description = "Health check and static user directory",
        title = "Users API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
