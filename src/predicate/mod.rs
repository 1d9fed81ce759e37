//! The injected predicate language (§3, §4.1, §9).
//!
//! The core never parses or interprets a literal expression's `body`
//! itself — it delegates to whatever [`Predicate`] the host wires into the
//! [`crate::pdp::engine::Pdp`] at construction time. This keeps the XACML
//! combining algebra isolated from the choice of predicate syntax, and
//! keeps the engine free of any process-wide registry or reflection (§9,
//! "Global object-mapper / application-context singletons").

use crate::model::context::EvaluationContext;
use thiserror::Error;

/// Failure evaluating a literal expression's body. Converted to a
/// `SYNTAX_ERROR`/`PROCESSING_ERROR` [`crate::model::cause::IndeterminateCause`]
/// at the leaf by [`crate::eval::expression::evaluate`] (§9, "No exceptions
/// for control flow").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredicateError {
    #[error("{0}")]
    Syntax(String),
    #[error("{0}")]
    Evaluation(String),
}

/// `(context, body) -> Result<bool, PredicateError>`, injected as a
/// dependency rather than looked up from a global registry.
pub trait Predicate {
    fn evaluate(&self, ctx: &EvaluationContext, body: &str) -> Result<bool, PredicateError>;
}

/// A minimal reference [`Predicate`] implementation recognizing the literal
/// bodies `"true"`, `"false"`, and `"error"`. Not meant to express real
/// policy logic — it exists so a [`crate::pdp::engine::Pdp`] can be
/// constructed and exercised before a caller writes its own predicate
/// language, and so this crate's own tests have a concrete `Predicate` to
/// evaluate against, since a `LITERAL` expression is otherwise unusable
/// without *some* concrete predicate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstPredicate;

impl Predicate for ConstPredicate {
    fn evaluate(&self, _ctx: &EvaluationContext, body: &str) -> Result<bool, PredicateError> {
        match body {
            "true" => Ok(true),
            "false" => Ok(false),
            "error" => Err(PredicateError::Evaluation(
                "const predicate: forced error".into(),
            )),
            other => Err(PredicateError::Syntax(format!(
                "const predicate: unrecognized body {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::context::{Action, Environment, Resource, Subject};

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
    fn const_predicate_recognizes_true_and_false() {
        assert_eq!(ConstPredicate.evaluate(&ctx(), "true"), Ok(true));
        assert_eq!(ConstPredicate.evaluate(&ctx(), "false"), Ok(false));
    }

    #[test]
    fn const_predicate_surfaces_forced_errors() {
        assert!(ConstPredicate.evaluate(&ctx(), "error").is_err());
    }

    #[test]
    fn const_predicate_rejects_unknown_bodies() {
        assert!(matches!(
            ConstPredicate.evaluate(&ctx(), "subject.roles contains admin"),
            Err(PredicateError::Syntax(_))
        ));
    }
}
