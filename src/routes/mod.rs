use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
pub mod health;

/// # Email Validation Endpoint
///
/// `GET /api/v1/validate?domain=<email>` — reports mail-worthiness of the
/// address's domain (MX resolution) and disposable-provider membership.
///
/// ## Responses
/// - **200 OK**: validation report (invalid-domain or valid-domain shape)
/// - **400 Bad Request**: missing email value
/// - **405 Method Not Allowed**: non-GET methods
/// - **500 Internal Server Error**: enrichment lookup failed
pub mod validate;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Mounted Services
/// - Health check endpoint (see [`health::configure_routes`])
/// - Email validation endpoint (see [`validate::configure_routes`])
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/v1/health - Service health status
/// GET /api/v1/validate?domain=user@example.com - Email validation
/// ```
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`validate::configure_routes`]: crate::routes::validate::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(validate::configure_routes),
    );
}
