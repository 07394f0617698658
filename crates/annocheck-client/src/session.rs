// crates/annocheck-client/src/session.rs
// ============================================================================
// Module: Annotation Session
// Description: Shared blocking HTTP client and the annotation fetch path.
// Purpose: Issue one GET per fetch and map responses into the error taxonomy.
// Dependencies: annocheck-core, reqwest, serde, thiserror, url
// ============================================================================

//! ## Overview
//! The session wraps one blocking `reqwest` client built once at
//! construction. A fetch issues a single GET for the clinical annotation
//! collection filtered by gene symbol and distinguishes three terminal
//! outcomes: unknown entity (404), transport or server failure (any other
//! non-2xx or network error), and a successfully parsed collection. A 2xx
//! with an empty `data` array is a successful empty snapshot, not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use annocheck_core::ClinicalAnnotation;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::ClientConfig;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while constructing the session.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base endpoint is not a valid URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    /// The underlying HTTP client could not be built.
    #[error("http client build failed: {0}")]
    Build(String),
}

/// Terminal outcomes of a failed annotation fetch.
///
/// # Invariants
/// - `UnknownEntity` is reserved for HTTP 404; every other non-2xx status
///   maps to `Status` so reports can keep the two apart.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The data source does not know the gene or variant (HTTP 404).
    #[error("{symbol}: non-existent gene or variant")]
    UnknownEntity {
        /// Identifier the collection was filtered by.
        symbol: String,
    },
    /// The request completed with a non-success status other than 404.
    #[error("{symbol}: request failed with status {status}")]
    Status {
        /// Identifier the collection was filtered by.
        symbol: String,
        /// HTTP status code of the response.
        status: u16,
    },
    /// The request never produced a response.
    #[error("{symbol}: transport error: {message}")]
    Transport {
        /// Identifier the collection was filtered by.
        symbol: String,
        /// Underlying transport failure.
        message: String,
    },
    /// The response body was not a valid annotation envelope.
    #[error("{symbol}: response decode failed: {message}")]
    Decode {
        /// Identifier the collection was filtered by.
        symbol: String,
        /// Underlying decode failure.
        message: String,
    },
}

// ============================================================================
// SECTION: Wire Envelope
// ============================================================================

/// Top-level response envelope for collection queries.
#[derive(Debug, Default, Deserialize)]
struct AnnotationEnvelope {
    /// Fetched annotation records; absent key means an empty collection.
    #[serde(default)]
    data: Vec<ClinicalAnnotation>,
}

// ============================================================================
// SECTION: Session
// ============================================================================

/// Session-scoped client for the clinical annotation API.
///
/// # Invariants
/// - Built once per run and used sequentially; fetches are side-effect free
///   and repeatable within a run.
#[derive(Debug)]
pub struct AnnotationClient {
    /// Parsed base endpoint the session is bound to.
    base_url: Url,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl AnnotationClient {
    /// Creates a session bound to the configured base endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the base URL does not parse or the HTTP
    /// client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;
        Ok(Self {
            base_url,
            client,
        })
    }

    /// Fetches the clinical annotation collection filtered by gene symbol.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::UnknownEntity`] on 404, [`FetchError::Status`]
    /// on any other non-2xx status, and [`FetchError::Transport`] or
    /// [`FetchError::Decode`] when the request or body parse fails.
    pub fn fetch_annotations(
        &self,
        symbol: &str,
    ) -> Result<Vec<ClinicalAnnotation>, FetchError> {
        let url = self.collection_url(symbol);
        let response =
            self.client.get(url).send().map_err(|err| FetchError::Transport {
                symbol: symbol.to_string(),
                message: err.to_string(),
            })?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::UnknownEntity {
                symbol: symbol.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }
        let envelope: AnnotationEnvelope =
            response.json().map_err(|err| FetchError::Decode {
                symbol: symbol.to_string(),
                message: err.to_string(),
            })?;
        Ok(envelope.data)
    }

    /// Builds the collection URL with the symbol as an encoded filter key.
    fn collection_url(&self, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("/v1/data/clinicalAnnotation");
        url.query_pairs_mut().append_pair("location.genes.symbol", symbol);
        url
    }
}
