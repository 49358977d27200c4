//! # preflight
//!
//! An embeddable CORS plugin: one registration call mirrors a host server's
//! route table with `OPTIONS` preflight routes and installs a pre-response
//! hook that decorates every outgoing reply with `Access-Control-*` headers.
//!
//! ## Overview
//!
//! The plugin does not ship a server and does not depend on a concrete
//! framework. A host grants it two narrow capabilities, route-table access
//! and a pre-response hook slot, and the plugin does the rest:
//!
//! - **[`config`]** - The raw options surface and the normalized [`CorsPolicy`]
//! - **[`preflight`]** - Registers one `OPTIONS` route per distinct routed path
//! - **[`decorate`]** - The hook appending CORS headers to every reply, faults included
//! - **[`host`]** - Capability traits an embedding server implements
//! - **[`request`]** / **[`response`]** - The request/reply vocabulary shared at that boundary
//! - **[`plugin`]** - The single [`register`] entry point wiring the pieces
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use preflight::{register, CorsOptions};
//!
//! // `server` is anything implementing preflight::HostServer
//! let options = CorsOptions {
//!     allowed_origins: Some("https://app.example.com,https://admin.example.com".to_string()),
//!     allow_creds: Some(true),
//!     ..CorsOptions::default()
//! };
//! register(&mut server, Some(options));
//! ```
//!
//! ## Decoration rules
//!
//! With no origin configuration the advertised origin is `*` and credentials
//! are off. A configured allow-list admits exactly its members and silently
//! leaves replies to other origins undecorated; an `overrideOrigin` is sent
//! verbatim; origin echoing reflects the request's own Origin header.
//! Credentials default to allowed, stick to an explicit `allowCreds: false`,
//! and are always forced off when the resolved origin is the wildcard.
//! Methods, headers, and max-age fall back to fixed defaults when not
//! configured.
//!
//! Registration never fails and installs nothing asynchronous: it reads the
//! route table once, synchronously, before the host serves traffic.

pub mod config;
pub mod decorate;
pub mod host;
pub mod plugin;
pub mod preflight;
pub mod request;
pub mod response;

pub use config::{
    CorsOptions, CorsPolicy, DEFAULT_ALLOW_HEADERS, DEFAULT_ALLOW_METHODS, DEFAULT_MAX_AGE,
    WILDCARD_ORIGIN,
};
pub use decorate::CorsDecorator;
pub use host::{HostServer, PreResponseHook, ResponseSink, RouteHandler, RouteTable};
pub use plugin::register;
pub use preflight::register_preflight_routes;
pub use request::{HeaderVec, Request, MAX_INLINE_HEADERS};
pub use response::{Fault, Reply, Response};
