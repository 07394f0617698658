// crates/annocheck-core/src/lib.rs
// ============================================================================
// Module: Annocheck Core
// Description: Data model and conformance checks for clinical annotations.
// Purpose: Provide typed records, the evidence-level code set, and pure checks.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Core types for validating clinical annotation collections returned by the
//! PharmGKB REST API. The model is read-only: records are deserialized from
//! one fetched snapshot, evaluated by pure checks, and discarded. Nothing in
//! this crate performs I/O.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod checks;
pub mod level;
pub mod model;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use checks::CheckFailure;
pub use checks::CheckPass;
pub use checks::evidence_levels_valid;
pub use checks::has_target_drug;
pub use checks::min_pediatric_count;
pub use level::EvidenceLevel;
pub use level::ParseEvidenceLevelError;
pub use model::ChemicalRef;
pub use model::ClinicalAnnotation;
pub use model::EvidenceLevelField;
