//! Preflight route registrar.
//!
//! Mirrors the host's route table: every distinct path that already has a
//! route gets one synthetic `OPTIONS` route answering preflight probes with a
//! fixed acknowledgement body. The routes carry no header logic of their own;
//! their responses pass through the same pre-response decoration as every
//! other reply.

use std::collections::HashSet;
use std::sync::Arc;

use http::Method;
use tracing::{debug, info};

use crate::config::CorsPolicy;
use crate::host::{RouteHandler, RouteTable};
use crate::request::Request;
use crate::response::Response;

/// Register one OPTIONS preflight route per distinct path on the host
///
/// Paths are taken from the host's route table at call time and deduplicated
/// preserving first-seen order, so a path registered under several methods
/// still gets exactly one preflight route. An empty route table registers
/// nothing. Runs synchronously during registration, before traffic.
///
/// Registration is per call: calling this twice registers the OPTIONS routes
/// twice, the same as registering any plugin twice on one server.
pub fn register_preflight_routes(server: &mut (impl RouteTable + ?Sized), policy: &CorsPolicy) {
    let handler: RouteHandler =
        Arc::new(|_req: &Request| Response::json(200, serde_json::json!({ "cors": "true" })));

    let mut seen = HashSet::new();
    let mut registered = 0usize;
    for path in server.route_paths() {
        if !seen.insert(path.clone()) {
            continue;
        }
        debug!(path = %path, "Preflight route registered");
        server.add_route(Method::OPTIONS, &path, Arc::clone(&handler));
        registered += 1;
    }

    info!(
        routes = registered,
        origin_allow_list = policy.allowed_origins.is_some(),
        "CORS preflight routes mirrored from host route table"
    );
}
