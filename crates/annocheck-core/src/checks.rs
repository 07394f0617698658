// crates/annocheck-core/src/checks.rs
// ============================================================================
// Module: Conformance Checks
// Description: Pure conformance checks over one fetched annotation snapshot.
// Purpose: Evaluate drug presence, pediatric volume, and evidence validity.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Each check is a pure evaluation over one fetched collection: no I/O, no
//! shared state, no ordering dependency between checks. A failed check
//! returns a [`CheckFailure`] naming the violated expectation; the caller
//! attaches the entity identifier when reporting.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;

use thiserror::Error;

use crate::level::EvidenceLevel;
use crate::model::ClinicalAnnotation;
use crate::model::EvidenceLevelField;

// ============================================================================
// SECTION: Check Outcomes
// ============================================================================

/// Diagnostic payload for a passing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckPass {
    /// The target drug was found; carries the matched record's evidence term.
    DrugFound {
        /// Evidence-level term of the first matching record, when present.
        level: Option<String>,
    },
    /// Enough pediatric annotations were present.
    PediatricCount {
        /// Number of records flagged pediatric.
        found: usize,
    },
    /// Every record carried a valid evidence level.
    EvidenceLevelsValid {
        /// Number of records inspected.
        records: usize,
    },
}

/// Violated expectation reported by a failing check.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Messages name the expectation, not the entity; callers add the entity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckFailure {
    /// The fetched collection was empty.
    #[error("no annotations found")]
    NoAnnotations,
    /// No record's chemical list contained the target drug.
    #[error("drug not found: {drug}")]
    DrugNotFound {
        /// Drug name that was searched for.
        drug: String,
    },
    /// Fewer pediatric annotations than required.
    #[error("only {found} pediatric annotations found, expected at least {required}")]
    PediatricBelowMinimum {
        /// Number of records flagged pediatric.
        found: usize,
        /// Required minimum.
        required: usize,
    },
    /// A record carried no evidence-level attribute at all.
    #[error("record {index} has no evidence level attribute")]
    EvidenceLevelMissing {
        /// Index of the offending record within the snapshot.
        index: usize,
    },
    /// The evidence-level attribute was a bare scalar instead of an object.
    #[error("record {index} evidence level is not an object: {value}")]
    EvidenceLevelNotObject {
        /// Index of the offending record within the snapshot.
        index: usize,
        /// The scalar value that was received.
        value: String,
    },
    /// The evidence-level object lacked a `term` value.
    #[error("record {index} evidence level is missing its term")]
    EvidenceLevelMissingTerm {
        /// Index of the offending record within the snapshot.
        index: usize,
    },
    /// The term was outside the closed evidence-level set.
    #[error("record {index} has invalid evidence level: {term}")]
    EvidenceLevelInvalid {
        /// Index of the offending record within the snapshot.
        index: usize,
        /// The out-of-set term that was received.
        term: String,
    },
}

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Scans every record's chemical list for a case-sensitive substring match
/// against `drug` and reports the first match's evidence term.
///
/// # Errors
///
/// Returns [`CheckFailure::NoAnnotations`] on an empty snapshot and
/// [`CheckFailure::DrugNotFound`] when no record matches.
pub fn has_target_drug(
    records: &[ClinicalAnnotation],
    drug: &str,
) -> Result<CheckPass, CheckFailure> {
    if records.is_empty() {
        return Err(CheckFailure::NoAnnotations);
    }
    for record in records {
        if record.chemicals.iter().any(|chemical| chemical.name.contains(drug)) {
            let level = record.evidence_field().and_then(EvidenceLevelField::term).cloned();
            return Ok(CheckPass::DrugFound {
                level,
            });
        }
    }
    Err(CheckFailure::DrugNotFound {
        drug: drug.to_string(),
    })
}

/// Counts records whose pediatric flag is exactly `true`.
///
/// # Errors
///
/// Returns [`CheckFailure::PediatricBelowMinimum`] when fewer than `minimum`
/// records carry the flag.
pub fn min_pediatric_count(
    records: &[ClinicalAnnotation],
    minimum: usize,
) -> Result<CheckPass, CheckFailure> {
    let found = records.iter().filter(|record| record.pediatric == Some(true)).count();
    if found >= minimum {
        Ok(CheckPass::PediatricCount {
            found,
        })
    } else {
        Err(CheckFailure::PediatricBelowMinimum {
            found,
            required: minimum,
        })
    }
}

/// Validates that every record's evidence-level attribute is an object whose
/// `term` belongs to the closed [`EvidenceLevel`] set.
///
/// # Errors
///
/// Returns the first evidence-level violation, identifying the offending
/// record by index within the snapshot.
pub fn evidence_levels_valid(records: &[ClinicalAnnotation]) -> Result<CheckPass, CheckFailure> {
    for (index, record) in records.iter().enumerate() {
        let Some(field) = record.evidence_field() else {
            return Err(CheckFailure::EvidenceLevelMissing {
                index,
            });
        };
        let term = match field {
            EvidenceLevelField::Object {
                term,
            } => term.as_ref().ok_or(CheckFailure::EvidenceLevelMissingTerm {
                index,
            })?,
            EvidenceLevelField::Scalar(value) => {
                return Err(CheckFailure::EvidenceLevelNotObject {
                    index,
                    value: value.to_string(),
                });
            }
        };
        if EvidenceLevel::from_str(term).is_err() {
            return Err(CheckFailure::EvidenceLevelInvalid {
                index,
                term: term.clone(),
            });
        }
    }
    Ok(CheckPass::EvidenceLevelsValid {
        records: records.len(),
    })
}
