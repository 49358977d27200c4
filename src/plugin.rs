//! Plugin registration entry point.

use std::sync::Arc;

use tracing::info;

use crate::config::{CorsOptions, CorsPolicy};
use crate::decorate::CorsDecorator;
use crate::host::HostServer;
use crate::preflight::register_preflight_routes;

/// Register the CORS plugin on a host server
///
/// Builds the policy from whatever options were provided, mirrors every
/// distinct routed path with an OPTIONS preflight route, and installs the
/// response decorator hook. Runs once, synchronously, during host setup and
/// before traffic. Never fails; absent options yield the wildcard policy.
pub fn register(server: &mut (impl HostServer + ?Sized), options: Option<CorsOptions>) {
    let policy = CorsPolicy::from_options(options);
    register_preflight_routes(server, &policy);
    server.add_pre_response(Arc::new(CorsDecorator::new(policy)));
    info!(
        plugin = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "CORS plugin registered"
    );
}
