//! Response decorator: appends CORS headers before every reply is sent.

use tracing::debug;

use crate::config::{
    CorsPolicy, DEFAULT_ALLOW_HEADERS, DEFAULT_ALLOW_METHODS, DEFAULT_MAX_AGE, WILDCARD_ORIGIN,
};
use crate::host::{PreResponseHook, ResponseSink};
use crate::request::Request;

/// Pre-response hook that appends `Access-Control-*` headers
///
/// Holds the immutable [`CorsPolicy`] built at registration and applies it to
/// every outgoing reply, faults included. The hook mutates headers in place
/// and always hands control back to the host; the one rejection case (origin
/// not in a configured allow-list) leaves the reply untouched rather than
/// failing the request.
#[derive(Debug)]
pub struct CorsDecorator {
    policy: CorsPolicy,
}

impl CorsDecorator {
    /// Create a decorator for the given policy
    #[must_use]
    pub fn new(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    /// Resolve the `Access-Control-Allow-Origin` value for a request
    ///
    /// Precedence: allow-list membership, then the configured override, then
    /// echoing the request origin. `None` means an allow-list is configured
    /// and the request origin (possibly absent) is not a member, in which
    /// case the response must be left undecorated.
    ///
    /// Only called once some origin policy applies, so the echo fallback is
    /// reached only with an Origin header present.
    fn resolve_origin<'a>(&'a self, origin: Option<&'a str>) -> Option<&'a str> {
        if let Some(allowed) = &self.policy.allowed_origins {
            return match origin {
                Some(o) if allowed.contains(o) => Some(o),
                _ => None,
            };
        }
        if let Some(override_origin) = self.policy.override_origin.as_deref() {
            return Some(override_origin);
        }
        origin
    }
}

impl PreResponseHook for CorsDecorator {
    /// Append the five CORS headers to the outgoing reply
    ///
    /// Runs for every request outcome. An origin policy applies when an
    /// allow-list or override is configured, or when origin echoing is
    /// enabled and the request carried an Origin header; without one the
    /// advertised origin is `*` and credentials are off. Credentials are
    /// allowed unless explicitly configured off, and always forced off when
    /// the resolved origin is the wildcard (CORS spec forbids the pairing).
    fn on_pre_response(&self, req: &Request, reply: &mut dyn ResponseSink) {
        let origin = req.get_header("origin");
        let echo = self.policy.allow_origin_response == Some(true);

        let policy_applies = self.policy.allowed_origins.is_some()
            || self.policy.override_origin.is_some()
            || (echo && origin.is_some());

        let (resolved, creds_configured) = if policy_applies {
            match self.resolve_origin(origin) {
                Some(o) => (o, self.policy.allow_creds != Some(false)),
                None => {
                    debug!(
                        origin = origin.unwrap_or("<none>"),
                        "Origin not allowed - response left undecorated"
                    );
                    return;
                }
            }
        } else {
            (WILDCARD_ORIGIN, false)
        };

        // Wildcard origin must never advertise credentials
        let allow_creds = creds_configured && resolved != WILDCARD_ORIGIN;

        reply.set_header("access-control-allow-origin", resolved.to_string());
        reply.set_header("access-control-allow-credentials", allow_creds.to_string());
        reply.set_header(
            "access-control-allow-methods",
            self.policy
                .allow_methods
                .as_deref()
                .unwrap_or(DEFAULT_ALLOW_METHODS)
                .to_string(),
        );
        reply.set_header(
            "access-control-allow-headers",
            self.policy
                .allow_headers
                .as_deref()
                .unwrap_or(DEFAULT_ALLOW_HEADERS)
                .to_string(),
        );
        reply.set_header(
            "access-control-max-age",
            self.policy.max_age.unwrap_or(DEFAULT_MAX_AGE).to_string(),
        );
    }
}
