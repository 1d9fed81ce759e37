//! Decision strategies (§4.7): the closed set of reductions from the
//! seven-outcome [`EvaluationResult`] algebra down to a binary
//! [`crate::model::request::Decision`].

use crate::model::decision::EvaluationResult;
use crate::model::request::Decision;

/// A closed enumeration (§4.7: "adding one is a breaking change").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionStrategy {
    DefaultDeny,
    DefaultPermit,
    NotApplicablePermitIndeterminateDeny,
}

impl DecisionStrategy {
    /// Reduces an [`EvaluationResult`] to a binary decision. `PERMIT`/`DENY`
    /// pass through unchanged under every strategy; only the treatment of
    /// `NOT_APPLICABLE` and the `INDETERMINATE_*` family varies.
    pub fn reduce(&self, result: &EvaluationResult) -> Decision {
        match result {
            EvaluationResult::Permit => Decision::Permit,
            EvaluationResult::Deny => Decision::Deny,
            EvaluationResult::NotApplicable => match self {
                DecisionStrategy::DefaultDeny => Decision::Deny,
                DecisionStrategy::DefaultPermit => Decision::Permit,
                DecisionStrategy::NotApplicablePermitIndeterminateDeny => Decision::Permit,
            },
            EvaluationResult::Indeterminate { .. }
            | EvaluationResult::IndeterminateDeny { .. }
            | EvaluationResult::IndeterminatePermit { .. }
            | EvaluationResult::IndeterminateDenyPermit { .. } => match self {
                DecisionStrategy::DefaultDeny => Decision::Deny,
                DecisionStrategy::DefaultPermit => Decision::Permit,
                DecisionStrategy::NotApplicablePermitIndeterminateDeny => Decision::Deny,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cause::IndeterminateCause;

    fn indeterminate() -> EvaluationResult {
        EvaluationResult::Indeterminate {
            cause: IndeterminateCause::syntax_error("boom"),
        }
    }

    #[test]
    fn permit_and_deny_pass_through_every_strategy() {
        for strategy in [
            DecisionStrategy::DefaultDeny,
            DecisionStrategy::DefaultPermit,
            DecisionStrategy::NotApplicablePermitIndeterminateDeny,
        ] {
            assert_eq!(strategy.reduce(&EvaluationResult::Permit), Decision::Permit);
            assert_eq!(strategy.reduce(&EvaluationResult::Deny), Decision::Deny);
        }
    }

    #[test]
    fn default_deny_denies_not_applicable_and_indeterminate() {
        let strategy = DecisionStrategy::DefaultDeny;
        assert_eq!(strategy.reduce(&EvaluationResult::NotApplicable), Decision::Deny);
        assert_eq!(strategy.reduce(&indeterminate()), Decision::Deny);
    }

    #[test]
    fn default_permit_permits_not_applicable_and_indeterminate() {
        let strategy = DecisionStrategy::DefaultPermit;
        assert_eq!(strategy.reduce(&EvaluationResult::NotApplicable), Decision::Permit);
        assert_eq!(strategy.reduce(&indeterminate()), Decision::Permit);
    }

    #[test]
    fn not_applicable_permit_indeterminate_deny_splits_the_two() {
        let strategy = DecisionStrategy::NotApplicablePermitIndeterminateDeny;
        assert_eq!(strategy.reduce(&EvaluationResult::NotApplicable), Decision::Permit);
        assert_eq!(strategy.reduce(&indeterminate()), Decision::Deny);
    }
}
