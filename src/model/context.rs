//! Request-scoped evaluation context: subject, resource, action and environment.
//!
//! Values here are read-only for the duration of an evaluation (§3). The
//! core never mutates a context,
//! nor does it reach into the network or a PIP to populate one — by the time
//! a context reaches [`crate::pdp::engine::Pdp`], it is fully assembled.

use super::value::Attributes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The entity making the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub user_id: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

/// The entity being acted upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub sub_resources: Option<Vec<String>>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub attributes: Attributes,
}

/// An HTTP-request shaped view of the action being performed. The core treats
/// this purely as an opaque attribute source; it never inspects method/path
/// itself (that belongs to the injected predicate language).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Action {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub query: HashMap<String, String>,
    #[serde(default)]
    pub path_vars: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
    #[serde(default)]
    pub cookies: HashMap<String, String>,
    #[serde(default)]
    pub session: Attributes,
    #[serde(default)]
    pub attributes: Attributes,
}

/// Deployment-wide and per-service environmental attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Environment {
    #[serde(default)]
    pub global: Attributes,
    #[serde(default)]
    pub service: Attributes,
}

/// The complete, immutable input to a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    pub subject: Subject,
    pub resource: Resource,
    pub action: Action,
    pub environment: Environment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::value::AttributeValue;

    #[test]
    fn context_round_trips_through_json() {
        let ctx = EvaluationContext {
            subject: Subject {
                user_id: "alice".into(),
                roles: vec!["admin".into()],
                attributes: Attributes::from([("clearance".into(), AttributeValue::Long(3))]),
            },
            resource: Resource {
                name: "documents/1".into(),
                sub_resources: None,
                data: None,
                attributes: Attributes::new(),
            },
            action: Action {
                method: Some("GET".into()),
                ..Default::default()
            },
            environment: Environment::default(),
        };
        let json = serde_json::to_string(&ctx).unwrap();
        let back: EvaluationContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, back);
    }
}
