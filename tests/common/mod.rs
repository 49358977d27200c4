pub mod test_server {
    use std::sync::Arc;

    use http::Method;
    use preflight::{
        Fault, HostServer, PreResponseHook, Reply, Request, Response, RouteHandler, RouteTable,
    };

    /// Minimal in-process host for exercising the plugin
    ///
    /// Keeps routes in registration order and runs every installed
    /// pre-response hook over the reply before handing it back, the way a
    /// real host would just before writing to the wire.
    #[derive(Default)]
    pub struct TestServer {
        routes: Vec<(Method, String, RouteHandler)>,
        hooks: Vec<Arc<dyn PreResponseHook>>,
    }

    impl TestServer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a plain application route answering with the given status
        pub fn route_returning(&mut self, method: Method, path: &str, status: u16) {
            let handler: RouteHandler = Arc::new(move |_req: &Request| {
                Response::json(status, serde_json::json!({ "ok": true }))
            });
            self.add_route(method, path, handler);
        }

        /// Paths registered for the given method, in registration order
        pub fn routes_for(&self, method: &Method) -> Vec<&str> {
            self.routes
                .iter()
                .filter(|(m, _, _)| m == method)
                .map(|(_, p, _)| p.as_str())
                .collect()
        }

        /// Dispatch a request through its handler and the pre-response hooks
        ///
        /// Returns `None` when no route matches, like a 404 before hooks ever
        /// see a reply would on a real host.
        pub fn dispatch(&self, req: &Request) -> Option<Reply> {
            let (_, _, handler) = self
                .routes
                .iter()
                .find(|(m, p, _)| *m == req.method && *p == req.path)?;
            let mut reply = Reply::Ok(handler(req));
            for hook in &self.hooks {
                hook.on_pre_response(req, &mut reply);
            }
            Some(reply)
        }

        /// Simulate a failed request: run the hooks over a fault-shaped reply
        pub fn dispatch_fault(&self, req: &Request, status: u16, message: &str) -> Reply {
            let mut reply = Reply::Fault(Fault::new(status, message));
            for hook in &self.hooks {
                hook.on_pre_response(req, &mut reply);
            }
            reply
        }
    }

    impl RouteTable for TestServer {
        fn route_paths(&self) -> Vec<String> {
            self.routes.iter().map(|(_, p, _)| p.clone()).collect()
        }

        fn add_route(&mut self, method: Method, path: &str, handler: RouteHandler) {
            self.routes.push((method, path.to_string(), handler));
        }
    }

    impl HostServer for TestServer {
        fn add_pre_response(&mut self, hook: Arc<dyn PreResponseHook>) {
            self.hooks.push(hook);
        }
    }
}
