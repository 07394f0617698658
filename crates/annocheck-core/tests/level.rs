// crates/annocheck-core/tests/level.rs
// ============================================================================
// Module: Evidence Level Tests
// Description: Tests for the closed evidence-level code set.
// ============================================================================
//! ## Overview
//! Validates membership, parse failures, and the wire form of each code.

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

use std::str::FromStr;

use annocheck_core::EvidenceLevel;

#[test]
fn every_code_parses_back_to_itself() {
    for level in EvidenceLevel::ALL {
        assert_eq!(EvidenceLevel::from_str(level.as_str()), Ok(level));
    }
}

#[test]
fn membership_is_exact_and_case_sensitive() {
    assert!(EvidenceLevel::from_str("5").is_err());
    assert!(EvidenceLevel::from_str("1a").is_err());
    assert!(EvidenceLevel::from_str("n/a").is_err());
    assert!(EvidenceLevel::from_str("").is_err());
    assert!(EvidenceLevel::from_str(" 1A").is_err());
}

#[test]
fn wire_form_matches_published_codes() {
    let level: EvidenceLevel = serde_json::from_str("\"N/A\"").unwrap();
    assert_eq!(level, EvidenceLevel::NotApplicable);
    assert_eq!(serde_json::to_string(&EvidenceLevel::Level2B).unwrap(), "\"2B\"");
}
