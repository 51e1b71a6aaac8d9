use crate::openapi::ApiDoc;
use crate::routes;
use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use std::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the HTTP server on an already-bound listener.
///
/// The returned [`Server`] does nothing until awaited or spawned. Binding to
/// port 0 and reading `listener.local_addr()` is how the integration tests get
/// a free port.
///
/// # Mounted
/// - `GET /health`, `GET /api/users` (see [`routes::configure`])
/// - Swagger UI at `/swagger-ui/`
/// - OpenAPI spec at `/api-docs/openapi.json`
pub fn run(listener: TcpListener) -> std::io::Result<Server> {
    let openapi = ApiDoc::openapi();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
