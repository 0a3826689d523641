//! Request execution over the network.
//!
//! # Design
//! `Transport` is the seam between the typed client and real I/O: tests
//! substitute canned responses, production uses `UreqTransport`. The ureq
//! agent is built with `http_status_as_error(false)` so 4xx/5xx responses
//! come back as data — status interpretation belongs to the client, not the
//! transport. Only I/O-level trouble (connect, read, write, malformed URL)
//! surfaces as `TransportError`.

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport over a shared `ureq::Agent`.
///
/// Sets `Accept: application/json` on every request; when a body is present
/// it is transmitted verbatim with `Content-Type: application/json;
/// charset=utf-8`. One connection per call, no retries.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let accept = ("Accept", "application/json");

        let mut response = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self
                .agent
                .get(&request.url)
                .header(accept.0, accept.1)
                .call()?,
            (HttpMethod::Delete, _) => self
                .agent
                .delete(&request.url)
                .header(accept.0, accept.1)
                .call()?,
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.url)
                .header(accept.0, accept.1)
                .content_type("application/json; charset=utf-8")
                .send(body.as_bytes())?,
            (HttpMethod::Post, None) => self
                .agent
                .post(&request.url)
                .header(accept.0, accept.1)
                .send_empty()?,
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.url)
                .header(accept.0, accept.1)
                .content_type("application/json; charset=utf-8")
                .send(body.as_bytes())?,
            (HttpMethod::Put, None) => self
                .agent
                .put(&request.url)
                .header(accept.0, accept.1)
                .send_empty()?,
        };

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse { status, body })
    }
}
