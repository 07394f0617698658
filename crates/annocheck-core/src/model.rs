// crates/annocheck-core/src/model.rs
// ============================================================================
// Module: Annotation Model
// Description: Deserialized shape of PharmGKB clinical annotation records.
// Purpose: Give checks a typed view over the fields they evaluate.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A clinical annotation arrives as an opaque JSON map; only the fields the
//! conformance checks evaluate are modeled here and every other field is
//! ignored on deserialization. The evidence-level attribute appears under
//! `levelOfEvidence` or, on older records, `clinicalAnnotationLevel`, and may
//! be either an object exposing a `term` or a bare scalar. Both shapes are
//! preserved so the validity check can reject the scalar form explicitly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// SECTION: Record Types
// ============================================================================

/// One clinical annotation record describing a gene-drug relationship.
///
/// # Invariants
/// - Read-only: records are never constructed locally outside tests, never
///   mutated, and never persisted.
/// - Absent `chemicals` deserializes as an empty list, not an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClinicalAnnotation {
    /// Drugs associated with the annotation.
    #[serde(default)]
    pub chemicals: Vec<ChemicalRef>,
    /// Marks whether the annotation applies to a pediatric population.
    /// Only an explicit `true` counts as pediatric.
    #[serde(default)]
    pub pediatric: Option<bool>,
    /// Primary evidence-level attribute.
    #[serde(default, rename = "levelOfEvidence")]
    pub level_of_evidence: Option<EvidenceLevelField>,
    /// Fallback evidence-level attribute carried by older records.
    #[serde(default, rename = "clinicalAnnotationLevel")]
    pub clinical_annotation_level: Option<EvidenceLevelField>,
}

impl ClinicalAnnotation {
    /// Resolves the evidence-level attribute, preferring `levelOfEvidence`.
    #[must_use]
    pub const fn evidence_field(&self) -> Option<&EvidenceLevelField> {
        match &self.level_of_evidence {
            Some(field) => Some(field),
            None => self.clinical_annotation_level.as_ref(),
        }
    }
}

/// Reference to a drug within an annotation's chemical list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChemicalRef {
    /// Drug name as published by the data source.
    #[serde(default)]
    pub name: String,
}

/// Wire shape of an evidence-level attribute.
///
/// # Invariants
/// - Only the object form can satisfy the validity check; the scalar form is
///   retained verbatim so failures can report what was actually received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EvidenceLevelField {
    /// Object form exposing the code under `term`.
    Object {
        /// Evidence-level code, absent on malformed records.
        #[serde(default)]
        term: Option<String>,
    },
    /// Any non-object value (bare string, number, null).
    Scalar(Value),
}

impl EvidenceLevelField {
    /// Returns the `term` value when the field has the object form.
    #[must_use]
    pub const fn term(&self) -> Option<&String> {
        match self {
            Self::Object {
                term,
            } => term.as_ref(),
            Self::Scalar(_) => None,
        }
    }
}
