//! Policy / PolicySet evaluation (§4.4) and the recursive [`Node`] dispatch.

use super::{rule, target};
use crate::combine;
use crate::error::ConfigError;
use crate::model::cause::IndeterminateCause;
use crate::model::context::EvaluationContext;
use crate::model::decision::EvaluationResult;
use crate::model::expression::ExpressionResult;
use crate::model::policy::{CombiningAlgorithm, Node, Policy, PolicySet};
use crate::predicate::Predicate;

/// Evaluates a [`Node`] (a `Policy` or nested `PolicySet`) per §4.4,
/// recursing into children as needed.
pub fn evaluate(
    ctx: &EvaluationContext,
    node: &Node,
    predicate: &dyn Predicate,
) -> Result<EvaluationResult, ConfigError> {
    match node {
        Node::Policy(policy) => evaluate_policy(ctx, policy, predicate),
        Node::PolicySet(policy_set) => evaluate_policy_set(ctx, policy_set, predicate),
    }
}

fn evaluate_policy(
    ctx: &EvaluationContext,
    policy: &Policy,
    predicate: &dyn Predicate,
) -> Result<EvaluationResult, ConfigError> {
    if policy.combine_algorithm == CombiningAlgorithm::OnlyOneApplicable {
        return Err(ConfigError::OnlyOneApplicableOnRules);
    }

    let target_result = target::is_applicable(ctx, Some(&policy.target), predicate);

    if target_result == ExpressionResult::NoMatch {
        return Ok(EvaluationResult::NotApplicable);
    }

    let effective_rules = policy.effective_rules();
    let rule_results: Vec<EvaluationResult> = effective_rules
        .iter()
        .map(|r| rule::evaluate(ctx, r, predicate))
        .collect();
    let combine_result = policy.combine_algorithm.combine_reduced(&rule_results)?;

    Ok(apply_target(&policy.id, "Policy", target_result, combine_result))
}

fn evaluate_policy_set(
    ctx: &EvaluationContext,
    policy_set: &PolicySet,
    predicate: &dyn Predicate,
) -> Result<EvaluationResult, ConfigError> {
    let target_result = target::is_applicable(ctx, Some(&policy_set.target), predicate);

    if target_result == ExpressionResult::NoMatch {
        return Ok(EvaluationResult::NotApplicable);
    }

    let combine_result = if policy_set.combine_algorithm == CombiningAlgorithm::OnlyOneApplicable {
        let mut pending: Option<Result<EvaluationResult, ConfigError>> = None;
        let result = combine::only_one_applicable(ctx, predicate, &policy_set.children, |child| {
            let outcome = evaluate(ctx, child, predicate);
            match outcome {
                Ok(r) => r,
                Err(e) => {
                    pending = Some(Err(e));
                    EvaluationResult::NotApplicable
                }
            }
        });
        if let Some(err) = pending {
            return err;
        }
        result
    } else {
        let child_results: Vec<EvaluationResult> = policy_set
            .children
            .iter()
            .map(|child| evaluate(ctx, child, predicate))
            .collect::<Result<_, _>>()?;
        policy_set.combine_algorithm.combine_reduced(&child_results)?
    };

    Ok(apply_target(
        &policy_set.id,
        "PolicySet",
        target_result,
        combine_result,
    ))
}

/// Steps 4–5 of §4.4, shared by `Policy` and `PolicySet`: a matching target
/// passes `combine_result` through (enriching an indeterminate cause with
/// the default description), an indeterminate target promotes it per the
/// matrix.
fn apply_target(
    id: &str,
    kind: &str,
    target_result: ExpressionResult,
    combine_result: EvaluationResult,
) -> EvaluationResult {
    match target_result {
        ExpressionResult::Match => combine_result.described_as(kind, id),
        ExpressionResult::Indeterminate { cause: target_cause } => {
            promote(combine_result, target_cause)
        }
        ExpressionResult::NoMatch => unreachable!("NoMatch handled by caller before combining"),
    }
}

fn promote(combine_result: EvaluationResult, target_cause: IndeterminateCause) -> EvaluationResult {
    let wrap = || IndeterminateCause::processing_error("Target evaluation was indeterminate")
        .with_children(vec![target_cause.clone()]);

    match combine_result {
        EvaluationResult::NotApplicable => EvaluationResult::NotApplicable,
        EvaluationResult::Permit | EvaluationResult::IndeterminatePermit { .. } => {
            EvaluationResult::IndeterminatePermit { cause: wrap() }
        }
        EvaluationResult::Deny | EvaluationResult::IndeterminateDeny { .. } => {
            EvaluationResult::IndeterminateDeny { cause: wrap() }
        }
        EvaluationResult::IndeterminateDenyPermit { .. } | EvaluationResult::Indeterminate { .. } => {
            EvaluationResult::IndeterminateDenyPermit { cause: wrap() }
        }
    }
}
