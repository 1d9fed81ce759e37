//! The recursive predicate-expression tree (§3, §4.1).

use super::cause::IndeterminateCause;
use serde::{Deserialize, Serialize};

/// How a [`Expression::Composition`]'s children are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombinationType {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// A node in the expression tree. Exactly one of `Literal`'s body or
/// `Composition`'s children is present, enforced structurally by the variant
/// shape rather than by a shared optional-field struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExpressionBody {
    #[serde(rename = "LITERAL")]
    Literal {
        #[serde(rename = "expression", default)]
        body: Option<String>,
    },
    #[serde(rename = "COMPOSITION")]
    Composition {
        #[serde(rename = "combinationType")]
        combination_type: CombinationType,
        #[serde(rename = "subExpressions", default)]
        children: Option<Vec<Expression>>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub body: ExpressionBody,
}

impl Expression {
    pub fn literal(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            body: ExpressionBody::Literal {
                body: Some(body.into()),
            },
        }
    }

    pub fn composition(
        id: impl Into<String>,
        combination_type: CombinationType,
        children: Vec<Expression>,
    ) -> Self {
        Self {
            id: id.into(),
            description: None,
            body: ExpressionBody::Composition {
                combination_type,
                children: Some(children),
            },
        }
    }
}

/// Result of evaluating an [`Expression`] against a context (§3's
/// `ExpressionResult`). `Match`/`NoMatch` never carry a cause; `Indeterminate`
/// always does — the invariant is encoded structurally rather than by an
/// optional field on a shared struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resultType")]
pub enum ExpressionResult {
    #[serde(rename = "MATCH")]
    Match,
    #[serde(rename = "NO_MATCH")]
    NoMatch,
    #[serde(rename = "INDETERMINATE")]
    Indeterminate { cause: IndeterminateCause },
}

impl ExpressionResult {
    pub fn cause(&self) -> Option<&IndeterminateCause> {
        match self {
            ExpressionResult::Indeterminate { cause } => Some(cause),
            _ => None,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, ExpressionResult::Indeterminate { .. })
    }
}
