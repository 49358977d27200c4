//! Response model and the fault-aware reply wrapper.
//!
//! Hosts represent a failed request differently from a successful one: a
//! [`Fault`] keeps the internal error message apart from the wire-facing
//! [`Response`] it will be serialized into. [`Reply`] is the sum of the two
//! and routes header writes to whichever container actually reaches the
//! client, so the decoration hook never has to care which case it got.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::host::ResponseSink;
use crate::request::HeaderVec;

/// Outgoing response data: status, headers, and JSON body
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    /// HTTP status code (200, 404, 500, etc.)
    pub status: u16,
    /// HTTP response headers (stack-allocated for ≤16 headers)
    #[serde(skip_serializing)]
    pub headers: HeaderVec,
    /// Response body as JSON
    pub body: Value,
}

impl Response {
    /// Create a new response with the given status, headers, and body
    #[must_use]
    pub fn new(status: u16, headers: HeaderVec, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a JSON response with default headers
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        let mut headers = HeaderVec::new();
        headers.push((Arc::from("content-type"), "application/json".to_string()));
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get a header by name (case-insensitive per RFC 7230)
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Add or update a header
    pub fn set_header(&mut self, name: &str, value: String) {
        // Remove existing header with same name (case-insensitive)
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value));
    }
}

/// An error-shaped reply
///
/// Splits what the operator sees from what the client sees: `message` is the
/// internal description, `output` is the response actually written to the
/// wire. Header decoration on a fault must land in `output.headers`.
#[derive(Debug, Clone)]
pub struct Fault {
    /// Internal error description, never sent to the client
    pub message: String,
    /// The wire-facing response for this fault
    pub output: Response,
}

impl Fault {
    /// Create a fault whose wire output is a JSON error body
    #[must_use]
    pub fn new(status: u16, message: &str) -> Self {
        Self {
            message: message.to_string(),
            output: Response::json(status, serde_json::json!({ "error": message })),
        }
    }
}

/// The reply a host is about to send: a normal response or a fault
#[derive(Debug, Clone)]
pub enum Reply {
    /// Normal handler response
    Ok(Response),
    /// Error-shaped reply; only its `output` reaches the wire
    Fault(Fault),
}

impl Reply {
    /// Status code of whichever response will reach the wire
    #[inline]
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Reply::Ok(res) => res.status,
            Reply::Fault(fault) => fault.output.status,
        }
    }

    /// Consume the reply, yielding the response to write to the wire
    #[must_use]
    pub fn into_response(self) -> Response {
        match self {
            Reply::Ok(res) => res,
            Reply::Fault(fault) => fault.output,
        }
    }
}

impl ResponseSink for Response {
    fn get_header(&self, name: &str) -> Option<&str> {
        Response::get_header(self, name)
    }

    fn set_header(&mut self, name: &str, value: String) {
        Response::set_header(self, name, value);
    }
}

/// Header access on a reply lands in the container the client will see:
/// the response itself for `Ok`, the fault's `output` for `Fault`.
impl ResponseSink for Reply {
    fn get_header(&self, name: &str) -> Option<&str> {
        match self {
            Reply::Ok(res) => res.get_header(name),
            Reply::Fault(fault) => fault.output.get_header(name),
        }
    }

    fn set_header(&mut self, name: &str, value: String) {
        match self {
            Reply::Ok(res) => res.set_header(name, value),
            Reply::Fault(fault) => fault.output.set_header(name, value),
        }
    }
}
