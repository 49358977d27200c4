//! Plugin configuration: the raw options surface and the normalized policy.
//!
//! Configuration is two-phase. [`CorsOptions`] is the wire-shaped surface a
//! host deserializes from its own config (camelCase keys, every field
//! optional). [`CorsPolicy::from_options`] normalizes it once at registration
//! time into the immutable [`CorsPolicy`] the decorator consults per request.
//! Normalization keeps only what was explicitly provided; defaults are
//! resolved at decoration time, so an unset field and an explicitly
//! configured one stay distinguishable for the lifetime of the policy.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Methods advertised when `allowMethods` is not configured
pub const DEFAULT_ALLOW_METHODS: &str = "GET,POST,PUT,DELETE";

/// Headers advertised when `allowHeaders` is not configured
pub const DEFAULT_ALLOW_HEADERS: &str =
    "Accept, Authorization, Content-Type, If-None-Match, X-Requested-With";

/// Preflight cache lifetime in seconds advertised when `maxAge` is not configured (20 days)
pub const DEFAULT_MAX_AGE: u32 = 1_728_000;

/// Origin advertised when no origin policy is configured
pub const WILDCARD_ORIGIN: &str = "*";

/// Raw plugin options as hosts provide them
///
/// Every field is optional; an absent key means "not configured", which the
/// decorator treats differently from an explicitly configured value (an
/// explicit `allowCreds: false` sticks, an absent one defaults to allowed).
/// Building a policy from options never fails; there is no invalid
/// combination, only keys that are present or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorsOptions {
    /// Allow credentialed requests (`Access-Control-Allow-Credentials`)
    pub allow_creds: Option<bool>,
    /// Comma-separated method list for `Access-Control-Allow-Methods`
    pub allow_methods: Option<String>,
    /// Comma-separated header list for `Access-Control-Allow-Headers`
    pub allow_headers: Option<String>,
    /// Echo the request's Origin header back as the allowed origin
    pub allow_origin_response: Option<bool>,
    /// Comma-separated allow-list; requests from origins outside it are
    /// passed through undecorated
    pub allowed_origins: Option<String>,
    /// Fixed value for `Access-Control-Allow-Origin`, sent verbatim
    pub override_origin: Option<String>,
    /// Preflight cache lifetime in seconds (`Access-Control-Max-Age`)
    pub max_age: Option<u32>,
}

/// Normalized plugin configuration, built once at registration
///
/// Same shape as [`CorsOptions`] except that the origin allow-list is parsed
/// into a set for O(1) membership checks. Immutable after construction; the
/// decorator shares it read-only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    /// Allow credentialed requests; `None` means not configured
    pub allow_creds: Option<bool>,
    /// Configured method list, verbatim
    pub allow_methods: Option<String>,
    /// Configured header list, verbatim
    pub allow_headers: Option<String>,
    /// Echo the request origin when no allow-list or override is configured
    pub allow_origin_response: Option<bool>,
    /// Parsed origin allow-list. `Some` with an empty set is a provided but
    /// empty list and rejects every origin; `None` means no list configured.
    pub allowed_origins: Option<HashSet<String>>,
    /// Fixed origin override, verbatim
    pub override_origin: Option<String>,
    /// Configured preflight cache lifetime in seconds
    pub max_age: Option<u32>,
}

impl CorsPolicy {
    /// Build a policy from whatever options the host provided
    ///
    /// Copies over exactly the fields that were present and parses the
    /// `allowedOrigins` list (entries trimmed, empties discarded, duplicates
    /// collapsed). No defaulting happens here. Never fails.
    #[must_use]
    pub fn from_options(options: Option<CorsOptions>) -> Self {
        let opts = match options {
            Some(opts) => opts,
            None => return Self::default(),
        };
        Self {
            allow_creds: opts.allow_creds,
            allow_methods: opts.allow_methods,
            allow_headers: opts.allow_headers,
            allow_origin_response: opts.allow_origin_response,
            allowed_origins: opts.allowed_origins.as_deref().map(parse_origin_list),
            override_origin: opts.override_origin,
            max_age: opts.max_age,
        }
    }
}

/// Split a comma-separated origin list into a set
///
/// Entries are trimmed and empty entries discarded, so `"a, b,,c"` yields
/// `{a, b, c}` and `","` yields the empty set.
fn parse_origin_list(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
