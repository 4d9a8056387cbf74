use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Email Validation: `GET /api/v1/validate`
///
/// # Schemas
/// - `HealthResponse`: service status payload
/// - `ValidDomainReport` / `InvalidDomainReport`: the two validation report
///   shapes
/// - `ApiMessage`: fixed client-error body
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::validate::validate,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::report::ValidDomainReport,
            crate::models::report::InvalidDomainReport,
            crate::models::report::ApiMessage
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Disposable-domain and MX validation endpoints")
    ),
    info(
        description = "Reports whether an email's domain is reachable by mail and whether it is a known disposable provider",
        title = "Mailprobe API",
        version = "0.4.0",
    )
)]
pub struct ApiDoc;
