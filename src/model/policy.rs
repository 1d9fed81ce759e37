//! The policy tree: [`Rule`], [`Policy`], [`PolicySet`] and the combining
//! algorithm each carries (§3).
//!
//! Rather than a class hierarchy with runtime reflection, `Rule`/`Policy`/
//! `PolicySet` are three plain structs and [`Node`] is the tagged union a
//! `PolicySet`'s children (or an [`crate::model::request::AuthzRequest`]'s
//! root) dispatch on (§9, "Polymorphic principle").

use super::expression::Expression;
use serde::{Deserialize, Serialize};

/// Final authorization effect a matched [`Rule`] asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    #[serde(rename = "PERMIT")]
    Permit,
    #[serde(rename = "DENY")]
    Deny,
}

/// The six combining algorithms (§4.5). Values are part of the stable wire
/// contract (§6) — renaming a variant is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombiningAlgorithm {
    DenyOverrides,
    PermitOverrides,
    DenyUnlessPermit,
    PermitUnlessDeny,
    FirstApplicable,
    OnlyOneApplicable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` means "inherit the owning policy's target" (§3 invariant).
    #[serde(default)]
    pub target: Option<Expression>,
    /// `None` is treated as MATCH (§3 invariant).
    #[serde(default)]
    pub condition: Option<Expression>,
    pub effect: Effect,
}

impl Rule {
    /// Returns a copy of this rule whose target is guaranteed to be present,
    /// inheriting `inherited_target` when this rule declared none of its
    /// own. This is the "effective-rule view" §9 asks for in place of
    /// mutating a shared policy tree in place.
    pub fn with_effective_target(&self, inherited_target: &Expression) -> Rule {
        if self.target.is_some() {
            return self.clone();
        }
        Rule {
            target: Some(inherited_target.clone()),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    pub target: Expression,
    #[serde(rename = "combineAlgorithmName")]
    pub combine_algorithm: CombiningAlgorithm,
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub is_root: bool,
}

impl Policy {
    /// Rules with target inheritance materialized (§3, §9). Does not mutate
    /// `self`; returns an owned `Vec` the evaluator consumes.
    pub fn effective_rules(&self) -> Vec<Rule> {
        self.rules
            .iter()
            .map(|r| r.with_effective_target(&self.target))
            .collect()
    }
}

/// A [`Policy`] or nested [`PolicySet`] — a `PolicySet`'s child, or the root
/// of an [`crate::model::request::AuthzRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "policy")]
    Policy(Policy),
    #[serde(rename = "policySet")]
    PolicySet(PolicySet),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Policy(p) => &p.id,
            Node::PolicySet(ps) => &ps.id,
        }
    }

    pub fn target(&self) -> &Expression {
        match self {
            Node::Policy(p) => &p.target,
            Node::PolicySet(ps) => &ps.target,
        }
    }

    pub fn combine_algorithm(&self) -> CombiningAlgorithm {
        match self {
            Node::Policy(p) => p.combine_algorithm,
            Node::PolicySet(ps) => ps.combine_algorithm,
        }
    }

    /// `"Policy"` or `"PolicySet"`, used when composing default cause
    /// descriptions (§4.2, §4.4, §4.5).
    pub fn kind_label(&self) -> &'static str {
        match self {
            Node::Policy(_) => "Policy",
            Node::PolicySet(_) => "PolicySet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySet {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    pub target: Expression,
    #[serde(rename = "combineAlgorithmName")]
    pub combine_algorithm: CombiningAlgorithm,
    pub children: Vec<Node>,
    #[serde(default)]
    pub is_root: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::expression::CombinationType;

    fn expr(id: &str) -> Expression {
        Expression::literal(id, "true")
    }

    #[test]
    fn targetless_rule_inherits_policy_target() {
        let policy_target = expr("policy-target");
        let rule = Rule {
            id: "r1".into(),
            description: None,
            target: None,
            condition: None,
            effect: Effect::Permit,
        };

        let effective = rule.with_effective_target(&policy_target);

        assert_eq!(effective.target, Some(policy_target));
    }

    #[test]
    fn rule_with_own_target_is_unchanged() {
        let own_target = expr("own-target");
        let rule = Rule {
            id: "r1".into(),
            description: None,
            target: Some(own_target.clone()),
            condition: None,
            effect: Effect::Deny,
        };

        let effective = rule.with_effective_target(&expr("policy-target"));

        assert_eq!(effective.target, Some(own_target));
    }

    #[test]
    fn effective_rules_does_not_mutate_original_policy() {
        let policy = Policy {
            id: "p1".into(),
            description: None,
            target: expr("policy-target"),
            combine_algorithm: CombiningAlgorithm::DenyOverrides,
            rules: vec![Rule {
                id: "r1".into(),
                description: None,
                target: None,
                condition: None,
                effect: Effect::Permit,
            }],
            is_root: true,
        };

        let effective = policy.effective_rules();

        assert_eq!(effective[0].target, Some(policy.target.clone()));
        assert_eq!(policy.rules[0].target, None);
    }

    #[test]
    fn node_exposes_id_and_target_for_either_variant() {
        let policy = Node::Policy(Policy {
            id: "p1".into(),
            description: None,
            target: expr("t1"),
            combine_algorithm: CombiningAlgorithm::FirstApplicable,
            rules: vec![],
            is_root: false,
        });
        assert_eq!(policy.id(), "p1");
        assert_eq!(policy.kind_label(), "Policy");

        let policy_set = Node::PolicySet(PolicySet {
            id: "ps1".into(),
            description: None,
            target: expr("t2"),
            combine_algorithm: CombiningAlgorithm::OnlyOneApplicable,
            children: vec![],
            is_root: true,
        });
        assert_eq!(policy_set.id(), "ps1");
        assert_eq!(policy_set.kind_label(), "PolicySet");
    }

    #[test]
    fn combination_type_used_transitively_compiles() {
        let _ = CombinationType::And;
    }
}
