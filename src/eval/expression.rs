//! Three-valued expression evaluation (§4.1).

use crate::model::context::EvaluationContext;
use crate::model::expression::{CombinationType, Expression, ExpressionBody, ExpressionResult};
use crate::model::cause::IndeterminateCause;
use crate::predicate::{Predicate, PredicateError};

/// Evaluates an [`Expression`] against a context using the injected
/// `predicate` for literal bodies.
///
/// All children of a composition are evaluated before any aggregation
/// happens — even once a short-circuiting `NO_MATCH`/`MATCH` is observed —
/// so that indeterminate provenance from every child is preserved (§4.1,
/// §5 "Ordering guarantees").
pub fn evaluate(
    ctx: &EvaluationContext,
    expr: &Expression,
    predicate: &dyn Predicate,
) -> ExpressionResult {
    match &expr.body {
        ExpressionBody::Literal { body } => evaluate_literal(ctx, body.as_deref(), predicate),
        ExpressionBody::Composition {
            combination_type,
            children,
        } => evaluate_composition(ctx, *combination_type, children.as_deref(), predicate),
    }
}

fn evaluate_literal(
    ctx: &EvaluationContext,
    body: Option<&str>,
    predicate: &dyn Predicate,
) -> ExpressionResult {
    let Some(body) = body else {
        return ExpressionResult::Indeterminate {
            cause: IndeterminateCause::syntax_error("Expression is null"),
        };
    };

    match predicate.evaluate(ctx, body) {
        Ok(true) => ExpressionResult::Match,
        Ok(false) => ExpressionResult::NoMatch,
        Err(PredicateError::Syntax(msg)) => ExpressionResult::Indeterminate {
            cause: IndeterminateCause::syntax_error(msg),
        },
        Err(PredicateError::Evaluation(msg)) => ExpressionResult::Indeterminate {
            cause: IndeterminateCause::syntax_error(msg),
        },
    }
}

fn evaluate_composition(
    ctx: &EvaluationContext,
    combination_type: CombinationType,
    children: Option<&[Expression]>,
    predicate: &dyn Predicate,
) -> ExpressionResult {
    let Some(children) = children.filter(|c| !c.is_empty()) else {
        return ExpressionResult::Indeterminate {
            cause: IndeterminateCause::syntax_error("Sub expression is empty"),
        };
    };

    let results: Vec<ExpressionResult> = children
        .iter()
        .map(|child| evaluate(ctx, child, predicate))
        .collect();

    let indeterminate_causes: Vec<IndeterminateCause> =
        results.iter().filter_map(|r| r.cause().cloned()).collect();

    match combination_type {
        CombinationType::And => {
            if results.iter().any(|r| matches!(r, ExpressionResult::NoMatch)) {
                ExpressionResult::NoMatch
            } else if !indeterminate_causes.is_empty() {
                indeterminate_result(indeterminate_causes)
            } else {
                ExpressionResult::Match
            }
        }
        CombinationType::Or => {
            if results.iter().any(|r| matches!(r, ExpressionResult::Match)) {
                ExpressionResult::Match
            } else if !indeterminate_causes.is_empty() {
                indeterminate_result(indeterminate_causes)
            } else {
                ExpressionResult::NoMatch
            }
        }
    }
}

fn indeterminate_result(children: Vec<IndeterminateCause>) -> ExpressionResult {
    ExpressionResult::Indeterminate {
        cause: IndeterminateCause::processing_error(
            "Sub expression evaluation produced indeterminate results",
        )
        .with_children(children),
    }
}
