/// Derives the domain portion of a raw email string.
///
/// Best-effort extraction: split on `@`, take the final segment, normalize.
/// Never raises an error, even for input with no `@` at all.
pub mod domain;

/// Read-only set of known disposable-email domains.
///
/// Unioned from two embedded static lists at process start and injected
/// into the request handlers; membership lookup is O(1).
pub mod denylist;

/// DNS lookups needed to judge a domain's mail-worthiness.
///
/// MX existence, exchange hostnames, exchange priorities, and concurrent
/// per-host IPv4 resolution, behind the [`dnsmx::MxResolver`] trait so the
/// HTTP layer can be tested without the network.
pub mod dnsmx;
