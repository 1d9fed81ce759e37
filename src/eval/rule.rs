//! Rule evaluation (§4.3).

use super::{expression, target};
use crate::model::cause::IndeterminateCause;
use crate::model::context::EvaluationContext;
use crate::model::decision::EvaluationResult;
use crate::model::expression::ExpressionResult;
use crate::model::policy::{Effect, Rule};
use crate::predicate::Predicate;

/// Evaluates a single rule against its (already target-inheritance
/// materialized, see [`crate::model::policy::Policy::effective_rules`])
/// target and condition, per the outcome matrix in §4.3.
pub fn evaluate(ctx: &EvaluationContext, rule: &Rule, predicate: &dyn Predicate) -> EvaluationResult {
    let target_result = target::is_applicable(ctx, rule.target.as_ref(), predicate);

    if let ExpressionResult::Indeterminate { cause } = target_result {
        return indeterminate_for_effect(rule.effect, rule.id.as_str(), cause);
    }
    if target_result == ExpressionResult::NoMatch {
        return EvaluationResult::NotApplicable;
    }

    // target_result is MATCH from here.
    let condition_result = match rule.condition.as_ref() {
        None => ExpressionResult::Match,
        Some(condition) => {
            let evaluated = expression::evaluate(ctx, condition, predicate);
            match evaluated {
                ExpressionResult::Indeterminate { cause } => ExpressionResult::Indeterminate {
                    cause: cause.described_as_default("Condition", &condition.id),
                },
                other => other,
            }
        }
    };

    match condition_result {
        ExpressionResult::Match => match rule.effect {
            Effect::Permit => EvaluationResult::Permit,
            Effect::Deny => EvaluationResult::Deny,
        },
        ExpressionResult::NoMatch => EvaluationResult::NotApplicable,
        ExpressionResult::Indeterminate { cause } => {
            indeterminate_for_effect(rule.effect, rule.id.as_str(), cause)
        }
    }
}

fn indeterminate_for_effect(
    effect: Effect,
    rule_id: &str,
    sub_cause: IndeterminateCause,
) -> EvaluationResult {
    let cause = IndeterminateCause::processing_error(format!("Rule {rule_id}"))
        .with_children(vec![sub_cause]);
    match effect {
        Effect::Permit => EvaluationResult::IndeterminatePermit { cause },
        Effect::Deny => EvaluationResult::IndeterminateDeny { cause },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::context::{Action, Environment, Resource, Subject};
    use crate::model::expression::Expression;
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

    fn rule(target: Option<&str>, condition: Option<&str>, effect: Effect) -> Rule {
        Rule {
            id: "r1".into(),
            description: None,
            target: target.map(|b| Expression::literal("t1", b)),
            condition: condition.map(|b| Expression::literal("c1", b)),
            effect,
        }
    }

    #[test]
    fn match_match_permit_yields_permit() {
        let r = rule(Some("true"), Some("true"), Effect::Permit);
        assert_eq!(evaluate(&ctx(), &r, &ConstPredicate), EvaluationResult::Permit);
    }

    #[test]
    fn match_match_deny_yields_deny() {
        let r = rule(Some("true"), Some("true"), Effect::Deny);
        assert_eq!(evaluate(&ctx(), &r, &ConstPredicate), EvaluationResult::Deny);
    }

    #[test]
    fn match_no_match_is_not_applicable() {
        let r = rule(Some("true"), Some("false"), Effect::Permit);
        assert_eq!(
            evaluate(&ctx(), &r, &ConstPredicate),
            EvaluationResult::NotApplicable
        );
    }

    #[test]
    fn no_match_target_is_not_applicable_regardless_of_condition() {
        let r = rule(Some("false"), Some("error"), Effect::Permit);
        assert_eq!(
            evaluate(&ctx(), &r, &ConstPredicate),
            EvaluationResult::NotApplicable
        );
    }

    #[test]
    fn indeterminate_target_on_permit_rule_is_indeterminate_permit() {
        let r = rule(Some("error"), None, Effect::Permit);
        match evaluate(&ctx(), &r, &ConstPredicate) {
            EvaluationResult::IndeterminatePermit { cause } => {
                assert_eq!(cause.description, "Rule r1");
                assert_eq!(cause.children.len(), 1);
                assert_eq!(
                    cause.children[0].description,
                    "Target with id t1 has syntax_error"
                );
            }
            other => panic!("expected IndeterminatePermit, got {other:?}"),
        }
    }

    #[test]
    fn indeterminate_target_on_deny_rule_is_indeterminate_deny() {
        let r = rule(Some("error"), None, Effect::Deny);
        assert!(matches!(
            evaluate(&ctx(), &r, &ConstPredicate),
            EvaluationResult::IndeterminateDeny { .. }
        ));
    }

    #[test]
    fn indeterminate_condition_wraps_condition_description() {
        let r = rule(Some("true"), Some("error"), Effect::Permit);
        match evaluate(&ctx(), &r, &ConstPredicate) {
            EvaluationResult::IndeterminatePermit { cause } => {
                assert_eq!(cause.children[0].description, "Condition with id c1 has syntax_error");
            }
            other => panic!("expected IndeterminatePermit, got {other:?}"),
        }
    }

    #[test]
    fn absent_target_and_condition_default_to_match() {
        let r = rule(None, None, Effect::Permit);
        assert_eq!(evaluate(&ctx(), &r, &ConstPredicate), EvaluationResult::Permit);
    }
}
