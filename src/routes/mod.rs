use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health` returns `{"status":"UP","timestamp":"<RFC 3339>"}`.
pub mod health;

/// # Users Endpoint
///
/// `GET /api/users` returns the fixed user directory.
pub mod users;

/// # Route Table
///
/// Registers every endpoint the service exposes:
///
/// ```text
/// GET /health     - Service health status
/// GET /api/users  - User directory
/// ```
///
/// Anything else falls through to actix-web's default 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(web::scope("/api").configure(users::configure_routes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn test_route_table() {
        let app = test::init_service(App::new().configure(configure)).await;

        for uri in ["/health", "/api/users"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        }
    }

    #[actix_web::test]
    async fn test_unknown_path_is_not_found() {
        let app = test::init_service(App::new().configure(configure)).await;

        for uri in ["/nope", "/users", "/api/health", "/api/users/1"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {uri}");
        }
    }
}
