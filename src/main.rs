use std::net::TcpListener;
use users_api::config::Settings;
use users_api::error::StartupError;
use users_api::startup;

/// Users API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - `GET /health` and `GET /api/users`
/// - Swagger UI for API documentation
/// - Request logging through `env_logger` (`RUST_LOG`, default `info`)
/// - Environment configuration via `.env` file
///
/// # Configuration
/// - Server binds to `SERVER_HOST:SERVER_PORT`, `127.0.0.1:8080` by default
#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env()?;
    let listener = TcpListener::bind(settings.address())?;
    log::info!("listening on http://{}", listener.local_addr()?);

    startup::run(listener)?.await?;
    Ok(())
}
