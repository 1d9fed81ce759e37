//! The seven-outcome result algebra an evaluation of a [`crate::model::policy::Rule`],
//! [`crate::model::policy::Policy`] or [`crate::model::policy::PolicySet`] can
//! produce (§3, §4.3, §4.4).

use super::cause::IndeterminateCause;
use serde::{Deserialize, Serialize};

/// `Permit`/`Deny`/`NotApplicable` never carry a cause; every
/// `Indeterminate*` variant always does. Modeling the invariant as distinct
/// variants (rather than an `Option<IndeterminateCause>` field on one
/// struct) makes an evaluator that builds a `Permit` with a cause attached
/// a compile error instead of a runtime invariant violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType")]
pub enum EvaluationResult {
    #[serde(rename = "PERMIT")]
    Permit,
    #[serde(rename = "DENY")]
    Deny,
    #[serde(rename = "NOT_APPLICABLE")]
    NotApplicable,
    #[serde(rename = "INDETERMINATE")]
    Indeterminate { cause: IndeterminateCause },
    #[serde(rename = "INDETERMINATE_D")]
    IndeterminateDeny { cause: IndeterminateCause },
    #[serde(rename = "INDETERMINATE_P")]
    IndeterminatePermit { cause: IndeterminateCause },
    #[serde(rename = "INDETERMINATE_DP")]
    IndeterminateDenyPermit { cause: IndeterminateCause },
}

impl EvaluationResult {
    pub fn cause(&self) -> Option<&IndeterminateCause> {
        match self {
            EvaluationResult::Indeterminate { cause }
            | EvaluationResult::IndeterminateDeny { cause }
            | EvaluationResult::IndeterminatePermit { cause }
            | EvaluationResult::IndeterminateDenyPermit { cause } => Some(cause),
            _ => None,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        self.cause().is_some()
    }

    /// Returns a copy of this result with its cause's top-level description
    /// replaced, a no-op for `Permit`/`Deny`/`NotApplicable`. Used when a
    /// `Policy`/`PolicySet` whose target matched enriches a combining
    /// algorithm's indeterminate result (§4.4 step 4).
    pub fn described_as(&self, kind: &str, id: &str) -> EvaluationResult {
        match self {
            EvaluationResult::Indeterminate { cause } => EvaluationResult::Indeterminate {
                cause: cause.described_as_default(kind, id),
            },
            EvaluationResult::IndeterminateDeny { cause } => EvaluationResult::IndeterminateDeny {
                cause: cause.described_as_default(kind, id),
            },
            EvaluationResult::IndeterminatePermit { cause } => {
                EvaluationResult::IndeterminatePermit {
                    cause: cause.described_as_default(kind, id),
                }
            }
            EvaluationResult::IndeterminateDenyPermit { cause } => {
                EvaluationResult::IndeterminateDenyPermit {
                    cause: cause.described_as_default(kind, id),
                }
            }
            other => other.clone(),
        }
    }
}
