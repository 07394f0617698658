// crates/annocheck-core/src/level.rs
// ============================================================================
// Module: Evidence Levels
// Description: Closed set of clinical annotation evidence-level codes.
// Purpose: Provide a typed membership check for strength-of-evidence codes.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! PharmGKB assigns every clinical annotation a categorical evidence level
//! drawn from a fixed set of codes. This module models that set as a closed
//! enum so membership is a parse, not a lookup in a dynamic map.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Evidence Level Codes
// ============================================================================

/// Strength-of-evidence code attached to a clinical annotation.
///
/// # Invariants
/// - The set of codes is closed; any other string fails to parse.
/// - Wire form is the exact PharmGKB code (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EvidenceLevel {
    /// Level 1A: variant-drug pair in a clinical guideline or FDA label.
    #[serde(rename = "1A")]
    Level1A,
    /// Level 1B: high-strength evidence without guideline annotation.
    #[serde(rename = "1B")]
    Level1B,
    /// Level 2A: moderate evidence for a variant in a known pharmacogene.
    #[serde(rename = "2A")]
    Level2A,
    /// Level 2B: moderate evidence in replicated studies.
    #[serde(rename = "2B")]
    Level2B,
    /// Level 3: low-strength or unreplicated evidence.
    #[serde(rename = "3")]
    Level3,
    /// Level 4: case reports or in-vitro only.
    #[serde(rename = "4")]
    Level4,
    /// Not applicable.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl EvidenceLevel {
    /// All codes in the closed set, in rank order.
    pub const ALL: [Self; 7] = [
        Self::Level1A,
        Self::Level1B,
        Self::Level2A,
        Self::Level2B,
        Self::Level3,
        Self::Level4,
        Self::NotApplicable,
    ];

    /// Returns the canonical wire form of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level1A => "1A",
            Self::Level1B => "1B",
            Self::Level2A => "2A",
            Self::Level2B => "2B",
            Self::Level3 => "3",
            Self::Level4 => "4",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a member of the evidence-level set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid evidence level: {0}")]
pub struct ParseEvidenceLevelError(pub String);

impl FromStr for EvidenceLevel {
    type Err = ParseEvidenceLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "1A" => Ok(Self::Level1A),
            "1B" => Ok(Self::Level1B),
            "2A" => Ok(Self::Level2A),
            "2B" => Ok(Self::Level2B),
            "3" => Ok(Self::Level3),
            "4" => Ok(Self::Level4),
            "N/A" => Ok(Self::NotApplicable),
            other => Err(ParseEvidenceLevelError(other.to_string())),
        }
    }
}
