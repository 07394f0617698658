// conformance-tests/src/fixtures.rs
// ============================================================================
// Module: Conformance Test Fixtures
// Description: Mock annotation endpoint and payload builders.
// Purpose: Serve per-symbol canned responses for the offline contract suite.
// Dependencies: serde_json, tiny_http
// ============================================================================

//! ## Overview
//! The mock endpoint answers a fixed number of requests, routing on the
//! `location.genes.symbol` filter key: each configured symbol gets its canned
//! status and body, and unconfigured symbols get a 500 so suites notice an
//! unexpected fetch instead of silently passing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::thread;
use std::thread::JoinHandle;

use serde_json::Value;
use serde_json::json;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Mock Endpoint
// ============================================================================

/// Canned response for one gene symbol.
#[derive(Debug, Clone)]
pub struct Route {
    /// Symbol the route answers for.
    pub symbol: String,
    /// HTTP status to respond with.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl Route {
    /// A 200 route serving the given envelope body.
    #[must_use]
    pub fn ok(symbol: &str, body: String) -> Self {
        Self {
            symbol: symbol.to_string(),
            status: 200,
            body,
        }
    }

    /// A 404 route marking the symbol as unknown to the data source.
    #[must_use]
    pub fn not_found(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            status: 404,
            body: String::new(),
        }
    }
}

/// Local mock of the clinical annotation endpoint.
///
/// # Invariants
/// - Serves exactly the configured number of requests, then stops.
pub struct MockEndpoint {
    /// Base URL the mock listens on.
    base_url: String,
    /// Server thread, joined via [`MockEndpoint::join`].
    handle: JoinHandle<()>,
}

impl MockEndpoint {
    /// Starts a mock endpoint answering `requests` requests over `routes`.
    ///
    /// # Errors
    ///
    /// Returns an error when the local listener cannot be bound.
    pub fn serve(routes: Vec<Route>, requests: usize) -> Result<Self, String> {
        let server = Server::http("127.0.0.1:0").map_err(|err| err.to_string())?;
        let addr = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| "mock endpoint has no ip address".to_string())?;
        let handle = thread::spawn(move || {
            for _ in 0..requests {
                let Ok(request) = server.recv() else {
                    break;
                };
                let url = request.url().to_string();
                let route = routes
                    .iter()
                    .find(|route| url.contains(&format!("symbol={}", route.symbol)));
                let response = match route {
                    Some(route) => {
                        Response::from_string(route.body.clone()).with_status_code(route.status)
                    }
                    None => Response::from_string("unexpected fetch").with_status_code(500),
                };
                let _ = request.respond(response);
            }
        });
        Ok(Self {
            base_url: format!("http://{addr}"),
            handle,
        })
    }

    /// Returns the base URL the mock listens on.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Waits for the server thread to finish serving.
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

// ============================================================================
// SECTION: Payload Builders
// ============================================================================

/// Builds one well-formed annotation record.
#[must_use]
pub fn annotation(drug: &str, term: &str, pediatric: bool) -> Value {
    json!({
        "chemicals": [{"name": drug}],
        "pediatric": pediatric,
        "levelOfEvidence": {"term": term},
    })
}

/// Wraps records into the collection envelope body.
#[must_use]
pub fn envelope(records: &[Value]) -> String {
    json!({
        "data": records,
    })
    .to_string()
}
