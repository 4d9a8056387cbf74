use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Small fixed body for client errors (400/405).
#[derive(Serialize, Debug, PartialEq, ToSchema)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Report returned when the domain has no working MX path.
///
/// Note the shape quirk inherited from the original API: `mx_host` carries
/// the raw domain string here, while the valid-domain report carries a list
/// of exchange hostnames under the same key. Kept for wire compatibility;
/// changing it is a breaking API change.
#[derive(Serialize, Debug, ToSchema)]
pub struct InvalidDomainReport {
    pub block: bool,
    pub valid: bool,
    pub domain: String,
    pub disposable: bool,
    pub text: String,
    pub reason: String,
    pub mx_host: String,
    pub mx_ip: Option<Vec<String>>,
}

impl InvalidDomainReport {
    pub fn new(domain: String, disposable: bool) -> Self {
        Self {
            block: true,
            valid: false,
            mx_host: domain.clone(),
            domain,
            disposable,
            text: "Invalid domain".to_string(),
            reason: "Unable to get domain".to_string(),
            mx_ip: None,
        }
    }
}

/// Report returned when the domain resolves to at least one mail exchanger.
///
/// `block` mirrors `disposable`: a reachable domain is only blocked when it
/// is a known disposable provider.
#[derive(Serialize, Debug, ToSchema)]
pub struct ValidDomainReport {
    pub block: bool,
    pub valid: bool,
    pub domain: String,
    pub disposable: bool,
    pub text: String,
    pub reason: String,
    pub mx_host: Vec<String>,
    pub mx_ip: Vec<String>,
    pub mx_priority: HashMap<String, u16>,
}

impl ValidDomainReport {
    pub fn new(
        domain: String,
        disposable: bool,
        mx_host: Vec<String>,
        mx_ip: Vec<String>,
        mx_priority: HashMap<String, u16>,
    ) -> Self {
        let (text, reason) = if disposable {
            (
                "Disposable or temporary domain".to_string(),
                format!("{domain} is blacklisted domain"),
            )
        } else {
            (
                format!("{domain} looks fine"),
                "Whitelisted domain".to_string(),
            )
        };

        Self {
            block: disposable,
            valid: true,
            domain,
            disposable,
            text,
            reason,
            mx_host,
            mx_ip,
            mx_priority,
        }
    }
}
