use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::handlers::validation::{denylist::Denylist, dnsmx::MxResolver, domain};
use crate::models::{ApiMessage, InvalidDomainReport, ValidDomainReport};

#[derive(Deserialize, IntoParams)]
pub struct ValidateQuery {
    /// The email address to validate. The parameter is named `domain` for
    /// compatibility with the original API, even though it carries a full
    /// email address.
    #[serde(default)]
    pub domain: String,
}

/// # Email Validation Endpoint
///
/// Reports whether an email's domain can receive mail (MX resolution) and
/// whether it belongs to a known disposable-email provider.
///
/// ## Pipeline
/// 1. Extract the domain from the supplied address (no network I/O)
/// 2. Denylist membership check against the in-process disposable set
/// 3. MX existence probe; a failed or empty MX lookup short-circuits to the
///    invalid-domain report
/// 4. Enrichment: exchange hostnames, their IPv4 addresses (resolved
///    concurrently, all-or-nothing) and the hostname→priority map
///
/// ## Responses
/// - **200 OK**: a validation report, in one of two shapes:
///   - invalid domain: `mx_host` is the raw domain string and `mx_ip` is
///     null (inherited quirk, see [`InvalidDomainReport`])
///   - valid domain: `mx_host`/`mx_ip` are lists and `mx_priority` maps
///     each exchange to its preference
/// - **400 Bad Request**: no email value supplied
/// - **405 Method Not Allowed**: any method other than GET
/// - **500 Internal Server Error**: an enrichment lookup failed after the
///   MX probe had already succeeded
#[utoipa::path(
    get,
    path = "/api/v1/validate",
    params(ValidateQuery),
    responses(
        (status = 200, description = "Validation report", body = ValidDomainReport),
        (status = 400, description = "Missing email parameter", body = ApiMessage),
        (status = 405, description = "Method not allowed", body = ApiMessage),
        (status = 500, description = "Resolver failure during enrichment")
    ),
    tag = "Email Validation"
)]
pub async fn validate(
    query: web::Query<ValidateQuery>,
    denylist: web::Data<Denylist>,
    resolver: web::Data<dyn MxResolver>,
) -> Result<impl Responder, actix_web::Error> {
    let email = query.domain.trim();
    if email.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiMessage::new("Please provide email")));
    }

    let domain = domain::extract_domain(email);
    let disposable = denylist.is_disposable(&domain);

    // A failed MX lookup and "no MX records" both mean the domain cannot
    // receive mail; neither is a server error.
    if !resolver.has_mx(&domain).await {
        return Ok(HttpResponse::Ok().json(InvalidDomainReport::new(domain, disposable)));
    }

    let mx_host = resolver
        .mx_hosts(&domain)
        .await
        .map_err(|e| ErrorInternalServerError(format!("MX host lookup failed: {e}")))?;
    let mx_ip = resolver
        .resolve_ipv4(&mx_host)
        .await
        .map_err(|e| ErrorInternalServerError(format!("IPv4 resolution failed: {e}")))?;
    let mx_priority = resolver
        .mx_priorities(&domain)
        .await
        .map_err(|e| ErrorInternalServerError(format!("MX priority lookup failed: {e}")))?;

    Ok(HttpResponse::Ok().json(ValidDomainReport::new(
        domain,
        disposable,
        mx_host,
        mx_ip,
        mx_priority,
    )))
}

/// Fixed 405 body for non-GET methods on the validate resource.
pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(ApiMessage::new("405 Method Not Allowed"))
}

/// Configures the validation endpoint. The resource-level default service
/// gives non-GET methods the documented 405 JSON body instead of an empty
/// response.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/validate")
            .route(web::get().to(validate))
            .default_service(web::route().to(method_not_allowed)),
    );
}
