// crates/annocheck-cli/src/lib.rs
// ============================================================================
// Module: Annocheck CLI Library
// Description: Data-driven case runner shared by the annocheck binary.
// Purpose: Run every (identifier, check) case over one fetch per identifier.
// Dependencies: annocheck-core, annocheck-client
// ============================================================================

//! ## Overview
//! The runner executes a fixed set of conformance checks against each gene
//! identifier in a suite. Cases are independent and order-insensitive: a
//! failing case never aborts the run, and a fetch failure fails every case
//! for that identifier without touching the others.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod suite;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use suite::CaseOutcome;
pub use suite::CaseReport;
pub use suite::CheckKind;
pub use suite::DEFAULT_DRUG;
pub use suite::DEFAULT_GENES;
pub use suite::DEFAULT_MIN_PEDIATRIC;
pub use suite::FailureKind;
pub use suite::SuiteSpec;
pub use suite::run_suite;
