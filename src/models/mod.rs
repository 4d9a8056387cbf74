/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for health check endpoints.
pub mod health;

/// # Validation Report Entities
///
/// Typed response bodies for the validation endpoint: the invalid-domain
/// and valid-domain report shapes, plus the small message body used for
/// client errors.
pub mod report;

pub use health::HealthResponse;
pub use report::{ApiMessage, InvalidDomainReport, ValidDomainReport};
