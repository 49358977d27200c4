//! Capabilities the plugin needs from an embedding server.
//!
//! The plugin never takes a dependency on a concrete framework. A host grants
//! it two narrow capabilities instead: a view of the route table it can add
//! routes through ([`RouteTable`], extended by [`HostServer`] with hook
//! installation), and header access on an outgoing reply ([`ResponseSink`]).
//! Anything that can list its paths, accept an OPTIONS route, and run a hook
//! before sending a response can embed the plugin.

use std::sync::Arc;

use http::Method;

use crate::request::Request;
use crate::response::Response;

/// Handler invoked by the host when one of the plugin's routes matches
pub type RouteHandler = Arc<dyn Fn(&Request) -> Response + Send + Sync>;

/// A host's route table, as much of it as the plugin needs
pub trait RouteTable {
    /// Paths of all currently registered routes, in registration order.
    /// A path appears once per registered route, so paths registered under
    /// several methods appear several times.
    fn route_paths(&self) -> Vec<String>;

    /// Register a handler for `method` at `path`
    fn add_route(&mut self, method: Method, path: &str, handler: RouteHandler);
}

/// A host server the plugin can be registered on
pub trait HostServer: RouteTable {
    /// Install a hook the host runs before sending every response,
    /// whatever the outcome of the request, faults included.
    fn add_pre_response(&mut self, hook: Arc<dyn PreResponseHook>);
}

/// Header access on an outgoing reply
///
/// Implementations decide which header container the client will actually
/// see; [`crate::Reply`] routes writes into the fault output when the reply
/// is error-shaped.
pub trait ResponseSink {
    /// Get a header by name (case-insensitive per RFC 7230)
    fn get_header(&self, name: &str) -> Option<&str>;

    /// Add or update a header (case-insensitive replace)
    fn set_header(&mut self, name: &str, value: String);
}

/// Hook run by the host before every response is sent
///
/// Hooks mutate the reply in place and cannot short-circuit the exchange;
/// control always returns to the host.
pub trait PreResponseHook: Send + Sync {
    fn on_pre_response(&self, req: &Request, reply: &mut dyn ResponseSink);
}
