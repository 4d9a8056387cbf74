use std::collections::HashMap;

use async_trait::async_trait;
use futures::future::try_join_all;
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    error::ResolveError,
};

/// DNS lookups needed to judge a domain's mail-worthiness.
///
/// `has_mx` is deliberately failure-tolerant: a resolution error and "no
/// mail server" both mean the domain cannot receive mail, so it never fails
/// outward. The enrichment lookups (`mx_hosts`, `mx_priorities`,
/// `resolve_ipv4`) run only after `has_mx` has confirmed a working MX path,
/// so a failure there points at our own resolution and propagates as an
/// error instead of being masked.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MxResolver: Send + Sync {
    /// True iff the MX query succeeds and returns at least one record.
    async fn has_mx(&self, domain: &str) -> bool;

    /// Exchange hostnames for `domain`, in the order the resolver returned
    /// them, normalized to lowercase without the trailing dot.
    async fn mx_hosts(&self, domain: &str) -> Result<Vec<String>, ResolveError>;

    /// Hostname-to-preference map for `domain`, built from a second
    /// independent MX query. Later duplicate hostnames overwrite earlier
    /// ones.
    async fn mx_priorities(&self, domain: &str) -> Result<HashMap<String, u16>, ResolveError>;

    /// IPv4 addresses for every host, queried concurrently and flattened in
    /// host order. All-or-nothing: one failed lookup fails the whole call.
    async fn resolve_ipv4(&self, hosts: &[String]) -> Result<Vec<String>, ResolveError>;
}

/// `MxResolver` backed by the tokio trust-dns resolver.
pub struct SystemResolver {
    resolver: TokioAsyncResolver,
}

impl SystemResolver {
    /// Default resolver configuration; no retry or timeout tuning beyond
    /// what trust-dns ships with.
    pub fn new() -> Self {
        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default()),
        }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// MX exchanges come back as absolute names; strip the root dot and
/// lowercase so hosts match across the three lookups.
fn normalize_exchange(exchange: String) -> String {
    exchange.trim_end_matches('.').to_ascii_lowercase()
}

#[async_trait]
impl MxResolver for SystemResolver {
    async fn has_mx(&self, domain: &str) -> bool {
        match self.resolver.mx_lookup(domain).await {
            Ok(lookup) => lookup.iter().next().is_some(),
            Err(_) => false,
        }
    }

    async fn mx_hosts(&self, domain: &str) -> Result<Vec<String>, ResolveError> {
        let lookup = self.resolver.mx_lookup(domain).await?;
        Ok(lookup
            .iter()
            .map(|mx| normalize_exchange(mx.exchange().to_utf8()))
            .collect())
    }

    async fn mx_priorities(&self, domain: &str) -> Result<HashMap<String, u16>, ResolveError> {
        let lookup = self.resolver.mx_lookup(domain).await?;
        let mut priorities = HashMap::new();
        for mx in lookup.iter() {
            priorities.insert(normalize_exchange(mx.exchange().to_utf8()), mx.preference());
        }
        Ok(priorities)
    }

    async fn resolve_ipv4(&self, hosts: &[String]) -> Result<Vec<String>, ResolveError> {
        let lookups = hosts
            .iter()
            .map(|host| self.resolver.ipv4_lookup(host.as_str()));
        let results = try_join_all(lookups).await?;

        Ok(results
            .iter()
            .flat_map(|lookup| lookup.iter().map(|a| a.0.to_string()))
            .collect())
    }
}
