// crates/annocheck-cli/src/suite.rs
// ============================================================================
// Module: Conformance Suite Runner
// Description: Executes all checks for each identifier in a suite.
// Purpose: Produce one independent case report per (identifier, check) pair.
// Dependencies: annocheck-core, annocheck-client
// ============================================================================

//! ## Overview
//! One fetch per identifier feeds all three checks, so every check in a case
//! group evaluates the same snapshot. Failure reports keep the unknown-entity
//! path (HTTP 404) apart from transport failures and from assertion failures,
//! since the three call for different operator responses even though each is
//! terminal for its case.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use annocheck_client::AnnotationClient;
use annocheck_client::FetchError;
use annocheck_core::CheckPass;
use annocheck_core::ClinicalAnnotation;
use annocheck_core::evidence_levels_valid;
use annocheck_core::has_target_drug;
use annocheck_core::min_pediatric_count;

// ============================================================================
// SECTION: Suite Specification
// ============================================================================

/// Gene identifiers validated by the default suite.
pub const DEFAULT_GENES: [&str; 3] = ["CYP2D6", "FAKEGENE123", "CYP2C19"];

/// Target drug of the default suite's drug-presence check.
pub const DEFAULT_DRUG: &str = "Clopidogrel";

/// Minimum pediatric annotation count required by the default suite.
pub const DEFAULT_MIN_PEDIATRIC: usize = 5;

/// Declarative description of one suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteSpec {
    /// Identifiers to validate, one case group each.
    pub genes: Vec<String>,
    /// Target drug for the drug-presence check.
    pub drug: String,
    /// Minimum pediatric annotation count.
    pub min_pediatric: usize,
}

impl Default for SuiteSpec {
    fn default() -> Self {
        Self {
            genes: DEFAULT_GENES.iter().map(ToString::to_string).collect(),
            drug: DEFAULT_DRUG.to_string(),
            min_pediatric: DEFAULT_MIN_PEDIATRIC,
        }
    }
}

// ============================================================================
// SECTION: Case Reports
// ============================================================================

/// The check a case report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Drug-presence check.
    TargetDrug,
    /// Pediatric annotation volume check.
    PediatricVolume,
    /// Evidence-level validity check.
    EvidenceLevels,
}

impl CheckKind {
    /// Every check in suite order.
    pub const ALL: [Self; 3] = [Self::TargetDrug, Self::PediatricVolume, Self::EvidenceLevels];

    /// Returns the stable case name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TargetDrug => "has-target-drug",
            Self::PediatricVolume => "min-pediatric-count",
            Self::EvidenceLevels => "evidence-level-validity",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a failed case, kept distinct for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The data source does not know the identifier (HTTP 404).
    UnknownEntity,
    /// The fetch failed for any reason other than 404.
    Transport,
    /// Data was fetched but violated the checked expectation.
    Assertion,
}

/// Outcome of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The case passed; carries a human-readable diagnostic.
    Passed(String),
    /// The case failed; carries the classification and a message.
    Failed {
        /// Failure classification.
        kind: FailureKind,
        /// Message naming the violated expectation.
        message: String,
    },
}

/// Report for one (identifier, check) case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Identifier the case group was filtered by.
    pub symbol: String,
    /// Check the case executed.
    pub check: CheckKind,
    /// Pass/fail outcome with diagnostics.
    pub outcome: CaseOutcome,
}

impl CaseReport {
    /// Returns true when the case passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Passed(_))
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            CaseOutcome::Passed(diagnostic) => {
                write!(f, "PASS {} {}: {diagnostic}", self.symbol, self.check)
            }
            CaseOutcome::Failed {
                message, ..
            } => write!(f, "FAIL {} {}: {message}", self.symbol, self.check),
        }
    }
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Runs every check against every identifier in the suite.
///
/// One fetch is issued per identifier; cases never abort the run.
#[must_use]
pub fn run_suite(client: &AnnotationClient, spec: &SuiteSpec) -> Vec<CaseReport> {
    let mut reports = Vec::with_capacity(spec.genes.len() * CheckKind::ALL.len());
    for symbol in &spec.genes {
        match client.fetch_annotations(symbol) {
            Ok(records) => {
                for check in CheckKind::ALL {
                    reports.push(CaseReport {
                        symbol: symbol.clone(),
                        check,
                        outcome: evaluate(check, &records, spec),
                    });
                }
            }
            Err(err) => {
                let kind = fetch_failure_kind(&err);
                let message = err.to_string();
                for check in CheckKind::ALL {
                    reports.push(CaseReport {
                        symbol: symbol.clone(),
                        check,
                        outcome: CaseOutcome::Failed {
                            kind,
                            message: message.clone(),
                        },
                    });
                }
            }
        }
    }
    reports
}

/// Evaluates one check over a fetched snapshot.
fn evaluate(check: CheckKind, records: &[ClinicalAnnotation], spec: &SuiteSpec) -> CaseOutcome {
    let result = match check {
        CheckKind::TargetDrug => has_target_drug(records, &spec.drug),
        CheckKind::PediatricVolume => min_pediatric_count(records, spec.min_pediatric),
        CheckKind::EvidenceLevels => evidence_levels_valid(records),
    };
    match result {
        Ok(pass) => CaseOutcome::Passed(describe_pass(&pass, &spec.drug)),
        Err(failure) => CaseOutcome::Failed {
            kind: FailureKind::Assertion,
            message: failure.to_string(),
        },
    }
}

/// Formats the diagnostic line for a passing check.
fn describe_pass(pass: &CheckPass, drug: &str) -> String {
    match pass {
        CheckPass::DrugFound {
            level,
        } => match level {
            Some(level) => format!("{drug} found with level {level}"),
            None => format!("{drug} found without an evidence level"),
        },
        CheckPass::PediatricCount {
            found,
        } => format!("{found} pediatric annotations"),
        CheckPass::EvidenceLevelsValid {
            records,
        } => format!("{records} records carry valid evidence levels"),
    }
}

/// Maps a fetch error to its report classification.
const fn fetch_failure_kind(err: &FetchError) -> FailureKind {
    match err {
        FetchError::UnknownEntity {
            ..
        } => FailureKind::UnknownEntity,
        FetchError::Status {
            ..
        }
        | FetchError::Transport {
            ..
        }
        | FetchError::Decode {
            ..
        } => FailureKind::Transport,
    }
}
