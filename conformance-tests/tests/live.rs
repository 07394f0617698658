// conformance-tests/tests/live.rs
// ============================================================================
// Module: Live Suite
// Description: Conformance suite against the live PharmGKB API.
// ============================================================================
//! ## Overview
//! Runs the conformance checks against the real data source. Gated behind
//! the `live-api` feature so the default build stays hermetic; the endpoint
//! can be overridden through `ANNOCHECK_LIVE_BASE_URL`.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use annocheck_client::AnnotationClient;
use annocheck_client::ClientConfig;
use annocheck_client::FetchError;
use annocheck_core::CheckPass;
use annocheck_core::evidence_levels_valid;
use annocheck_core::has_target_drug;
use annocheck_core::min_pediatric_count;
use conformance_tests::env::live_base_url;

/// Identifiers known to exist in the live data source.
const KNOWN_GENES: [&str; 2] = ["CYP2D6", "CYP2C19"];

/// Identifier guaranteed absent from the live data source.
const FABRICATED_GENE: &str = "FAKEGENE123";

/// Session bound to the live endpoint (or its env override).
fn live_session() -> AnnotationClient {
    let base_url = live_base_url().unwrap();
    AnnotationClient::new(&ClientConfig::with_base_url(base_url)).unwrap()
}

#[test]
fn known_genes_have_annotations() {
    let client = live_session();
    for symbol in KNOWN_GENES {
        let records = client.fetch_annotations(symbol).unwrap();
        assert!(!records.is_empty(), "{symbol} returned an empty collection");
    }
}

#[test]
fn fabricated_gene_is_reported_as_unknown() {
    let client = live_session();
    let err = client.fetch_annotations(FABRICATED_GENE).unwrap_err();
    assert!(matches!(err, FetchError::UnknownEntity { .. }), "expected 404 path, got {err}");
}

#[test]
fn cyp2c19_has_clopidogrel_with_an_evidence_level() {
    let client = live_session();
    let records = client.fetch_annotations("CYP2C19").unwrap();
    let pass = has_target_drug(&records, "Clopidogrel").unwrap();
    let CheckPass::DrugFound {
        level,
    } = pass
    else {
        panic!("unexpected pass diagnostic: {pass:?}");
    };
    assert!(level.is_some(), "CYP2C19 Clopidogrel annotation carries no evidence level");
}

#[test]
fn cyp2c19_has_at_least_five_pediatric_annotations() {
    let client = live_session();
    let records = client.fetch_annotations("CYP2C19").unwrap();
    assert!(min_pediatric_count(&records, 5).is_ok());
}

#[test]
fn known_genes_carry_only_valid_evidence_levels() {
    let client = live_session();
    for symbol in KNOWN_GENES {
        let records = client.fetch_annotations(symbol).unwrap();
        assert!(
            evidence_levels_valid(&records).is_ok(),
            "{symbol} carries an invalid evidence level"
        );
    }
}
