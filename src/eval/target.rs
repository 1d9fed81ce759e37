//! Principle applicability (§4.2).

use super::expression;
use crate::model::context::EvaluationContext;
use crate::model::expression::{Expression, ExpressionResult};
use crate::predicate::Predicate;

/// `isApplicable`: `MATCH` when `target` is absent; otherwise the target's
/// evaluation, with an indeterminate result's top cause rewritten to the
/// default `"Target with id <target.id> has <code>"` description.
pub fn is_applicable(
    ctx: &EvaluationContext,
    target: Option<&Expression>,
    predicate: &dyn Predicate,
) -> ExpressionResult {
    let Some(target) = target else {
        return ExpressionResult::Match;
    };

    match expression::evaluate(ctx, target, predicate) {
        ExpressionResult::Indeterminate { cause } => ExpressionResult::Indeterminate {
            cause: cause.described_as_default("Target", &target.id),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::context::{Action, Environment, Resource, Subject};
    use crate::predicate::ConstPredicate;

    fn ctx() -> EvaluationContext {
        EvaluationContext {
            subject: Subject {
                user_id: "alice".into(),
                roles: vec![],
                attributes: Default::default(),
            },
            resource: Resource {
                name: "r".into(),
                sub_resources: None,
                data: None,
                attributes: Default::default(),
            },
            action: Action::default(),
            environment: Environment::default(),
        }
    }

    #[test]
    fn absent_target_is_match() {
        assert_eq!(
            is_applicable(&ctx(), None, &ConstPredicate),
            ExpressionResult::Match
        );
    }

    #[test]
    fn matching_target_is_match() {
        let target = Expression::literal("t1", "true");
        assert_eq!(
            is_applicable(&ctx(), Some(&target), &ConstPredicate),
            ExpressionResult::Match
        );
    }

    #[test]
    fn missing_target_is_no_match() {
        let target = Expression::literal("t1", "false");
        assert_eq!(
            is_applicable(&ctx(), Some(&target), &ConstPredicate),
            ExpressionResult::NoMatch
        );
    }

    #[test]
    fn indeterminate_target_gets_default_description() {
        let target = Expression::literal("t1", "error");
        match is_applicable(&ctx(), Some(&target), &ConstPredicate) {
            ExpressionResult::Indeterminate { cause } => {
                assert_eq!(cause.description, "Target with id t1 has syntax_error");
            }
            other => panic!("expected indeterminate, got {other:?}"),
        }
    }
}
