// crates/annocheck-client/src/config.rs
// ============================================================================
// Module: Client Configuration
// Description: Construction-time settings for the annotation client.
// Purpose: Bind the session to one base endpoint with fixed request limits.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The contract needs only the base endpoint; the timeout and user agent are
//! fixed at construction and never overridden per request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Production PharmGKB API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.pharmgkb.org";

/// Configuration for the annotation client.
///
/// # Invariants
/// - `base_url` is fixed for the lifetime of the session.
/// - `timeout` applies to the full request lifecycle of each fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base endpoint the session is bound to.
    pub base_url: String,
    /// Request timeout for each fetch.
    pub timeout: Duration,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: "annocheck/0.1".to_string(),
        }
    }
}

impl ClientConfig {
    /// Returns a configuration bound to the given base endpoint.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
