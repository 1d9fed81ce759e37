//! The boundary contract a PEP uses to drive [`crate::pdp::engine::Pdp`]
//! and read its decision back out (§3, §6).

use super::context::{Action, Environment, Resource, Subject};
use super::policy::Node;
use serde::{Deserialize, Serialize};

/// A single authorization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthzRequest {
    pub subject: Subject,
    pub resource: Resource,
    pub action: Action,
    pub environment: Environment,
    pub root_policy: Node,
}

/// Binary outcome a [`crate::pdp::strategy::DecisionStrategy`] reduces an
/// [`crate::model::decision::EvaluationResult`] down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "PERMIT")]
    Permit,
    #[serde(rename = "DENY")]
    Deny,
}

/// `details` is either a cause tree, a short string, or absent (§4.6, §6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecisionDetails {
    Cause(crate::model::cause::IndeterminateCause),
    Message(String),
}

/// The decision handed back to the enforcement layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthzDecision {
    pub decision: Decision,
    /// Milliseconds since the Unix epoch, captured when this decision was
    /// constructed.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DecisionDetails>,
}
