// conformance-tests/src/env.rs
// ============================================================================
// Module: Conformance Test Environment
// Description: Environment-backed settings for the live conformance suite.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: annocheck-client, std
// ============================================================================

//! ## Overview
//! Live-suite settings are read from environment variables and fall back to
//! the production endpoint. Invalid UTF-8 fails closed rather than running
//! against a half-read value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use annocheck_client::DEFAULT_BASE_URL;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Optional base endpoint override for the live suite.
pub const LIVE_BASE_URL_ENV: &str = "ANNOCHECK_LIVE_BASE_URL";

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the live-suite base endpoint, honoring the env override.
///
/// # Errors
///
/// Returns an error when the override is set but not valid UTF-8 or empty.
pub fn live_base_url() -> Result<String, String> {
    match std::env::var_os(LIVE_BASE_URL_ENV) {
        None => Ok(DEFAULT_BASE_URL.to_string()),
        Some(raw) => {
            let value = raw
                .into_string()
                .map_err(|_| format!("{LIVE_BASE_URL_ENV} must be valid UTF-8"))?;
            if value.trim().is_empty() {
                return Err(format!("{LIVE_BASE_URL_ENV} must not be empty"));
            }
            Ok(value)
        }
    }
}
