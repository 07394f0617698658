// crates/annocheck-client/src/lib.rs
// ============================================================================
// Module: Annocheck Client
// Description: HTTP session provider for the PharmGKB clinical annotation API.
// Purpose: Provide one shared blocking client and the annotation fetch path.
// Dependencies: annocheck-core, reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! One [`AnnotationClient`] is constructed per run, bound to a fixed base
//! endpoint, and shared across every case. The client is used sequentially;
//! its connection pool is released when the client is dropped. There are no
//! retries and no caching: each fetch issues exactly one GET and maps the
//! response into the fetch error taxonomy.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod session;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use config::DEFAULT_BASE_URL;
pub use session::AnnotationClient;
pub use session::ClientError;
pub use session::FetchError;
