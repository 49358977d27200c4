use std::sync::Arc;

use http::Method;
use preflight::{register, CorsOptions, HostServer, Reply, Request};

mod common;
use common::test_server::TestServer;
use tracing_util::TestTracing;

// Helper to build a request for `path` carrying an Origin header
fn request(method: Method, path: &str, origin: &str) -> Request {
    let mut req = Request::new(method, path);
    req.headers.push((Arc::from("origin"), origin.to_string()));
    req
}

#[test]
fn test_register_mirrors_routes_and_installs_hook() {
    let _tracing = TestTracing::init();
    let mut server = TestServer::new();
    server.route_returning(Method::GET, "/pets", 200);
    server.route_returning(Method::POST, "/pets", 201);
    server.route_returning(Method::GET, "/users", 200);

    register(
        &mut server,
        Some(CorsOptions {
            allowed_origins: Some("https://app.example".to_string()),
            ..CorsOptions::default()
        }),
    );

    assert_eq!(server.routes_for(&Method::OPTIONS), vec!["/pets", "/users"]);

    let reply = server
        .dispatch(&request(Method::GET, "/pets", "https://app.example"))
        .expect("application route still dispatches");
    let res = reply.into_response();
    assert_eq!(res.status, 200);
    assert_eq!(
        res.get_header("access-control-allow-origin"),
        Some("https://app.example")
    );
    assert_eq!(
        res.get_header("access-control-allow-credentials"),
        Some("true")
    );
}

#[test]
fn test_preflight_responses_are_decorated_like_any_other() {
    let _tracing = TestTracing::init();
    let mut server = TestServer::new();
    server.route_returning(Method::GET, "/pets", 200);

    register(
        &mut server,
        Some(CorsOptions {
            allowed_origins: Some("https://app.example".to_string()),
            max_age: Some(600),
            ..CorsOptions::default()
        }),
    );

    let reply = server
        .dispatch(&request(Method::OPTIONS, "/pets", "https://app.example"))
        .expect("preflight route registered");
    let res = reply.into_response();
    // Fixed acknowledgement body plus the uniform decoration
    assert_eq!(res.status, 200);
    assert_eq!(res.body, serde_json::json!({ "cors": "true" }));
    assert_eq!(
        res.get_header("access-control-allow-origin"),
        Some("https://app.example")
    );
    assert_eq!(res.get_header("access-control-max-age"), Some("600"));
}

#[test]
fn test_fault_replies_are_decorated_in_the_fault_output() {
    let _tracing = TestTracing::init();
    let mut server = TestServer::new();
    server.route_returning(Method::GET, "/pets", 200);

    register(
        &mut server,
        Some(CorsOptions {
            allow_origin_response: Some(true),
            ..CorsOptions::default()
        }),
    );

    let req = request(Method::GET, "/broken", "https://app.example");
    let reply = server.dispatch_fault(&req, 500, "handler exploded");
    match reply {
        Reply::Fault(fault) => {
            assert_eq!(
                fault.output.get_header("access-control-allow-origin"),
                Some("https://app.example")
            );
            assert_eq!(fault.output.body, serde_json::json!({ "error": "handler exploded" }));
        }
        Reply::Ok(_) => panic!("fault reply must stay a fault"),
    }
}

#[test]
fn test_disallowed_origin_passes_through_undecorated() {
    let _tracing = TestTracing::init();
    let mut server = TestServer::new();
    server.route_returning(Method::GET, "/pets", 200);

    register(
        &mut server,
        Some(CorsOptions {
            allowed_origins: Some("https://app.example".to_string()),
            ..CorsOptions::default()
        }),
    );

    let reply = server
        .dispatch(&request(Method::GET, "/pets", "https://evil.example"))
        .expect("rejection never fails the request");
    let res = reply.into_response();
    assert_eq!(res.status, 200);
    assert_eq!(res.body, serde_json::json!({ "ok": true }));
    assert_eq!(res.get_header("access-control-allow-origin"), None);
    assert_eq!(res.get_header("access-control-allow-credentials"), None);
}

#[test]
fn test_register_without_options_yields_wildcard_policy() {
    let _tracing = TestTracing::init();
    let mut server = TestServer::new();
    server.route_returning(Method::GET, "/pets", 200);

    register(&mut server, None);

    let reply = server
        .dispatch(&Request::new(Method::GET, "/pets"))
        .expect("route dispatches");
    let res = reply.into_response();
    assert_eq!(res.get_header("access-control-allow-origin"), Some("*"));
    assert_eq!(
        res.get_header("access-control-allow-credentials"),
        Some("false")
    );
}

#[test]
fn test_register_on_empty_server_installs_only_the_hook() {
    let _tracing = TestTracing::init();
    let mut server = TestServer::new();

    register(&mut server, None);

    assert!(server.routes_for(&Method::OPTIONS).is_empty());
    // The hook is installed regardless and still decorates faults
    let reply = server.dispatch_fault(&Request::new(Method::GET, "/nowhere"), 404, "no route");
    match reply {
        Reply::Fault(fault) => {
            assert_eq!(
                fault.output.get_header("access-control-allow-origin"),
                Some("*")
            );
        }
        Reply::Ok(_) => panic!("fault reply must stay a fault"),
    }
}

#[test]
fn test_register_works_through_a_trait_object() {
    let _tracing = TestTracing::init();
    let mut server = TestServer::new();
    server.route_returning(Method::GET, "/a", 200);

    let dyn_server: &mut dyn HostServer = &mut server;
    register(dyn_server, None);

    assert_eq!(server.routes_for(&Method::OPTIONS), vec!["/a"]);
}
