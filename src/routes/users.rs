use crate::models::{User, user};
use actix_web::{HttpResponse, Responder, get};

/// # List Users Endpoint
///
/// Returns the fixed user directory. The list is read-only and identical on
/// every call.
///
/// ## Response
///
/// - **200 OK**: JSON array of users ordered by `id`
///
/// ## Example Response
///
/// ```json
/// [
///   { "id": 1, "name": "John Doe", "email": "john@example.com" },
///   { "id": 2, "name": "Jane Smith", "email": "jane@example.com" }
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [User])
    ),
    tag = "Users"
)]
#[get("/users")]
pub async fn list_users() -> impl Responder {
    HttpResponse::Ok().json(user::all())
}

/// Registers `GET /users` relative to the enclosing scope.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(list_users);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    const EXPECTED: &str = r#"[{"id":1,"name":"John Doe","email":"john@example.com"},{"id":2,"name":"Jane Smith","email":"jane@example.com"}]"#;

    #[actix_web::test]
    async fn test_list_users() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap(), EXPECTED);
    }

    #[actix_web::test]
    async fn test_list_users_is_idempotent() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let first =
            test::call_and_read_body(&app, test::TestRequest::get().uri("/users").to_request())
                .await;
        let second =
            test::call_and_read_body(&app, test::TestRequest::get().uri("/users").to_request())
                .await;

        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn test_list_users_deserializes() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Vec<User> = test::call_and_read_body_json(&app, req).await;

        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith"]);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[1].id, 2);
    }
}
