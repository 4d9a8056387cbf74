use std::env;
use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web::Data};
use mailprobe::handlers::validation::denylist::Denylist;
use mailprobe::handlers::validation::dnsmx::{MxResolver, SystemResolver};
use mailprobe::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Mailprobe Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - The email validation and health endpoints under `/api/v1`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - A denylist and DNS resolver constructed once and shared read-only with
///   every worker
///
/// # Endpoints
/// - Validation: `GET /api/v1/validate?domain=<email>`
/// - Health: `GET /api/v1/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `HOST` / `PORT` environment variables (default `127.0.0.1:8080`)
/// - `RUST_LOG` controls log verbosity (default `info`)
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let denylist = Denylist::load().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    log::info!("loaded {} disposable domains", denylist.len());

    let denylist = Data::new(denylist);
    let resolver: Arc<dyn MxResolver> = Arc::new(SystemResolver::new());
    let resolver = Data::from(resolver);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    log::info!("listening on {host}:{port}");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(middleware::Logger::default())
            .app_data(denylist.clone())
            .app_data(resolver.clone())
            .app_data(Data::new(openapi.clone()))
            .configure(mailprobe::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((host, port))?
    .run()
    .await
}
