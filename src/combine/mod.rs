//! The six combining algorithms (§4.5).
//!
//! Five of them — everything but Only-One-Applicable — operate uniformly
//! over a list of already-reduced [`EvaluationResult`]s, whether those came
//! from Rules (§4.3) or from Policy/PolicySet children (§4.4). Only-One-
//! Applicable cannot: it needs each child's raw applicability *before*
//! committing to a full evaluation of just one of them, so it takes the
//! unreduced [`crate::model::policy::Node`] list plus an evaluator callback
//! instead.

use crate::error::ConfigError;
use crate::eval::target;
use crate::model::cause::IndeterminateCause;
use crate::model::context::EvaluationContext;
use crate::model::decision::EvaluationResult;
use crate::model::expression::ExpressionResult;
use crate::model::policy::{CombiningAlgorithm, Node};
use crate::predicate::Predicate;

impl CombiningAlgorithm {
    /// Dispatches to the uniform five-algorithm reduction. Returns
    /// `Err(ConfigError::OnlyOneApplicableOnRules)` for `OnlyOneApplicable`,
    /// since that algorithm needs the unreduced child list (see
    /// [`only_one_applicable`]) and is rejected outright for a Rule list
    /// (§4.5, §4.8).
    pub fn combine_reduced(&self, results: &[EvaluationResult]) -> Result<EvaluationResult, ConfigError> {
        match self {
            CombiningAlgorithm::DenyOverrides => Ok(deny_overrides(results)),
            CombiningAlgorithm::PermitOverrides => Ok(permit_overrides(results)),
            CombiningAlgorithm::DenyUnlessPermit => Ok(deny_unless_permit(results)),
            CombiningAlgorithm::PermitUnlessDeny => Ok(permit_unless_deny(results)),
            CombiningAlgorithm::FirstApplicable => Ok(first_applicable(results)),
            CombiningAlgorithm::OnlyOneApplicable => Err(ConfigError::OnlyOneApplicableOnRules),
        }
    }
}

fn causes_in_order(results: &[EvaluationResult]) -> Vec<IndeterminateCause> {
    results.iter().filter_map(|r| r.cause().cloned()).collect()
}

fn indeterminate_dp(results: &[EvaluationResult]) -> EvaluationResult {
    EvaluationResult::IndeterminateDenyPermit {
        cause: IndeterminateCause::processing_error(
            "Sub expression evaluation produced indeterminate results",
        )
        .with_children(causes_in_order(results)),
    }
}

fn indeterminate(results: &[EvaluationResult], direction: IndeterminateDirection) -> EvaluationResult {
    let cause = IndeterminateCause::processing_error(
        "Sub expression evaluation produced indeterminate results",
    )
    .with_children(causes_in_order(results));
    match direction {
        IndeterminateDirection::Deny => EvaluationResult::IndeterminateDeny { cause },
        IndeterminateDirection::Permit => EvaluationResult::IndeterminatePermit { cause },
    }
}

enum IndeterminateDirection {
    Deny,
    Permit,
}

/// §4.5 Deny-Overrides.
pub fn deny_overrides(results: &[EvaluationResult]) -> EvaluationResult {
    if results.iter().any(|r| matches!(r, EvaluationResult::Deny)) {
        return EvaluationResult::Deny;
    }

    let any_dp = results
        .iter()
        .any(|r| matches!(r, EvaluationResult::IndeterminateDenyPermit { .. }));
    let any_d = results
        .iter()
        .any(|r| matches!(r, EvaluationResult::IndeterminateDeny { .. }));
    let any_p = results
        .iter()
        .any(|r| matches!(r, EvaluationResult::IndeterminatePermit { .. }));
    let any_permit = results.iter().any(|r| matches!(r, EvaluationResult::Permit));

    if any_dp || (any_d && (any_p || any_permit)) {
        indeterminate_dp(results)
    } else if any_d {
        indeterminate(results, IndeterminateDirection::Deny)
    } else if any_permit {
        EvaluationResult::Permit
    } else if any_p {
        indeterminate(results, IndeterminateDirection::Permit)
    } else {
        EvaluationResult::NotApplicable
    }
}

/// §4.5 Permit-Overrides, symmetric to [`deny_overrides`].
pub fn permit_overrides(results: &[EvaluationResult]) -> EvaluationResult {
    if results.iter().any(|r| matches!(r, EvaluationResult::Permit)) {
        return EvaluationResult::Permit;
    }

    let any_dp = results
        .iter()
        .any(|r| matches!(r, EvaluationResult::IndeterminateDenyPermit { .. }));
    let any_p = results
        .iter()
        .any(|r| matches!(r, EvaluationResult::IndeterminatePermit { .. }));
    let any_d = results
        .iter()
        .any(|r| matches!(r, EvaluationResult::IndeterminateDeny { .. }));
    let any_deny = results.iter().any(|r| matches!(r, EvaluationResult::Deny));

    if any_dp || (any_p && (any_d || any_deny)) {
        indeterminate_dp(results)
    } else if any_p {
        indeterminate(results, IndeterminateDirection::Permit)
    } else if any_deny {
        EvaluationResult::Deny
    } else if any_d {
        indeterminate(results, IndeterminateDirection::Deny)
    } else {
        EvaluationResult::NotApplicable
    }
}

/// §4.5 Deny-Unless-Permit: PERMIT iff any child permits; every other
/// outcome, indeterminate included, collapses to DENY — except an empty
/// child list, which is NOT_APPLICABLE per §8's boundary property (see
/// DESIGN.md's "Empty-list boundary for Deny-Unless-Permit /
/// Permit-Unless-Deny" entry).
pub fn deny_unless_permit(results: &[EvaluationResult]) -> EvaluationResult {
    if results.is_empty() {
        EvaluationResult::NotApplicable
    } else if results.iter().any(|r| matches!(r, EvaluationResult::Permit)) {
        EvaluationResult::Permit
    } else {
        EvaluationResult::Deny
    }
}

/// §4.5 Permit-Unless-Deny: DENY iff any child denies; every other outcome
/// collapses to PERMIT — except an empty child list, which is
/// NOT_APPLICABLE (see DESIGN.md).
pub fn permit_unless_deny(results: &[EvaluationResult]) -> EvaluationResult {
    if results.is_empty() {
        EvaluationResult::NotApplicable
    } else if results.iter().any(|r| matches!(r, EvaluationResult::Deny)) {
        EvaluationResult::Deny
    } else {
        EvaluationResult::Permit
    }
}

/// §4.5 First-Applicable: the first PERMIT/DENY/indeterminate result wins,
/// but an indeterminate cause is built from **every** child's indeterminate
/// causes, not just those preceding the winner — a deviation from a strict
/// reading preserved deliberately (§9 "First-Applicable cause aggregation").
pub fn first_applicable(results: &[EvaluationResult]) -> EvaluationResult {
    let first_decisive = results.iter().find(|r| {
        matches!(
            r,
            EvaluationResult::Permit | EvaluationResult::Deny
        ) || r.is_indeterminate()
    });

    match first_decisive {
        None => EvaluationResult::NotApplicable,
        Some(EvaluationResult::Permit) => EvaluationResult::Permit,
        Some(EvaluationResult::Deny) => EvaluationResult::Deny,
        Some(_) => EvaluationResult::Indeterminate {
            cause: IndeterminateCause::processing_error(
                "Sub expression evaluation produced indeterminate results",
            )
            .with_children(causes_in_order(results)),
        },
    }
}

/// §4.5 Only-One-Applicable: tests each child's raw applicability first,
/// deferring full evaluation until exactly one candidate is known. Valid
/// only for `PolicySet` children — `CombiningAlgorithm::combine_reduced`
/// rejects it for Rule lists before this function is ever reached.
pub fn only_one_applicable(
    ctx: &EvaluationContext,
    predicate: &dyn Predicate,
    children: &[Node],
    mut eval_child: impl FnMut(&Node) -> EvaluationResult,
) -> EvaluationResult {
    let mut matched: Option<&Node> = None;

    for child in children {
        match target::is_applicable(ctx, Some(child.target()), predicate) {
            ExpressionResult::Indeterminate { cause } => {
                return EvaluationResult::Indeterminate {
                    cause: IndeterminateCause::processing_error(format!(
                        "{} with id {}",
                        child.kind_label(),
                        child.id()
                    ))
                    .with_children(vec![cause]),
                };
            }
            ExpressionResult::Match => {
                if matched.is_some() {
                    return EvaluationResult::Indeterminate {
                        cause: IndeterminateCause::processing_error(format!(
                            "{} with id {}",
                            child.kind_label(),
                            child.id()
                        )),
                    };
                }
                matched = Some(child);
            }
            ExpressionResult::NoMatch => {}
        }
    }

    match matched {
        Some(child) => eval_child(child),
        None => EvaluationResult::NotApplicable,
    }
}
