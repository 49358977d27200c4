//! Embedding demo: a toy host server with the CORS plugin registered.
//!
//! Run with `cargo run --example embedded` (set `RUST_LOG=debug` to watch the
//! plugin's tracing events, including the silent-rejection path).

use std::sync::Arc;

use http::Method;
use preflight::{
    register, CorsOptions, Fault, HostServer, PreResponseHook, Reply, Request, Response,
    RouteHandler, RouteTable,
};
use tracing_subscriber::EnvFilter;

/// A tiny in-process host: an ordered route list plus pre-response hooks
#[derive(Default)]
struct DemoServer {
    routes: Vec<(Method, String, RouteHandler)>,
    hooks: Vec<Arc<dyn PreResponseHook>>,
}

impl DemoServer {
    /// Dispatch a request the way a real host would: run the matching
    /// handler (or produce a 404 fault), then every pre-response hook.
    fn handle(&self, req: &Request) -> Reply {
        let route = self
            .routes
            .iter()
            .find(|(m, p, _)| *m == req.method && *p == req.path);
        let mut reply = match route {
            Some((_, _, handler)) => Reply::Ok(handler(req)),
            None => Reply::Fault(Fault::new(404, "no route matched")),
        };
        for hook in &self.hooks {
            hook.on_pre_response(req, &mut reply);
        }
        reply
    }
}

impl RouteTable for DemoServer {
    fn route_paths(&self) -> Vec<String> {
        self.routes.iter().map(|(_, p, _)| p.clone()).collect()
    }

    fn add_route(&mut self, method: Method, path: &str, handler: RouteHandler) {
        self.routes.push((method, path.to_string(), handler));
    }
}

impl HostServer for DemoServer {
    fn add_pre_response(&mut self, hook: Arc<dyn PreResponseHook>) {
        self.hooks.push(hook);
    }
}

fn print_exchange(server: &DemoServer, req: &Request) {
    let res = server.handle(req).into_response();
    println!("{} {} -> {}", req.method, req.path, res.status);
    for (name, value) in &res.headers {
        println!("  {name}: {value}");
    }
    println!("  body: {}", res.body);
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut server = DemoServer::default();
    let list_pets: RouteHandler = Arc::new(|_req: &Request| {
        Response::json(200, serde_json::json!({ "pets": ["rex", "whiskers"] }))
    });
    server.add_route(Method::GET, "/pets", list_pets);
    let list_users: RouteHandler =
        Arc::new(|_req: &Request| Response::json(200, serde_json::json!({ "users": [] })));
    server.add_route(Method::GET, "/users", list_users);

    register(
        &mut server,
        Some(CorsOptions {
            allowed_origins: Some("https://app.example.com".to_string()),
            max_age: Some(600),
            ..CorsOptions::default()
        }),
    );

    // Preflight probe from an allowed origin hits the mirrored OPTIONS route
    let mut probe = Request::new(Method::OPTIONS, "/pets");
    probe.set_header("origin", "https://app.example.com".to_string());
    print_exchange(&server, &probe);

    // The actual request gets the same decoration
    let mut fetch = Request::new(Method::GET, "/pets");
    fetch.set_header("origin", "https://app.example.com".to_string());
    print_exchange(&server, &fetch);

    // A disallowed origin passes through with no CORS headers at all
    let mut outsider = Request::new(Method::GET, "/pets");
    outsider.set_header("origin", "https://evil.example".to_string());
    print_exchange(&server, &outsider);

    // Faults are decorated too, in the output the client actually sees
    let mut missing = Request::new(Method::GET, "/nope");
    missing.set_header("origin", "https://app.example.com".to_string());
    print_exchange(&server, &missing);
}
