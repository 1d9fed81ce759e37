//! `authorization-core`: an XACML-3.0-flavored ABAC policy decision engine.
//!
//! Given a policy tree ([`model::policy::Node`]), a request context
//! ([`model::context::EvaluationContext`]) and an injected predicate
//! language ([`predicate::Predicate`]), [`pdp::engine::Pdp`] evaluates a
//! [`model::request::AuthzRequest`] down to a seven-outcome
//! [`model::decision::EvaluationResult`] and reduces it to a binary
//! [`model::request::AuthzDecision`] under a configured
//! [`pdp::strategy::DecisionStrategy`].
//!
//! The crate does not parse policy documents, fetch resource attributes, or
//! provide a predicate language of its own beyond the reference
//! [`predicate::ConstPredicate`] — those are host responsibilities.

pub mod combine;
pub mod error;
pub mod eval;
pub mod model;
pub mod pdp;
pub mod predicate;

pub use error::ConfigError;
pub use model::context::EvaluationContext;
pub use model::decision::EvaluationResult;
pub use model::request::{AuthzDecision, AuthzRequest, Decision};
pub use pdp::engine::Pdp;
pub use pdp::strategy::DecisionStrategy;
pub use predicate::{ConstPredicate, Predicate, PredicateError};
