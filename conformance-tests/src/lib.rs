// conformance-tests/src/lib.rs
// ============================================================================
// Module: Annocheck Conformance Tests Library
// Description: Shared fixtures and configuration for conformance suites.
// Purpose: Provide mock endpoints and live-run settings to the test binaries.
// Dependencies: annocheck-client, tiny_http
// ============================================================================

//! ## Overview
//! This crate hosts shared fixtures used by the conformance suites in
//! `conformance-tests/tests`: a mock annotation endpoint for the offline
//! contract suite and environment-backed settings for the live suite.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod env;
pub mod fixtures;
