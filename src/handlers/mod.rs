/// Domain extraction, denylist matching and DNS resolution for email
/// validation
pub mod validation;
