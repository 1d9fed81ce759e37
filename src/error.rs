//! Configuration errors: the one channel distinct from the evaluation
//! result algebra (§4.8, §7).
//!
//! Nothing in the evaluation core ever panics or returns an `Err` for an
//! anomaly encountered while evaluating a request — those become an
//! `INDETERMINATE`-family [`crate::model::decision::EvaluationResult`]. A
//! [`ConfigError`] means the policy tree itself was wired incorrectly by
//! whoever constructed it, which is a programmer error, not a decision.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Only-One-Applicable is only meaningful for `PolicySet` children; a
    /// `Policy` whose `rules` are combined with it is a malformed policy
    /// tree (§4.5, §4.8).
    #[error("Only-One-Applicable combining algorithm is not valid for a Rule list")]
    OnlyOneApplicableOnRules,
}
