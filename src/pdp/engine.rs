//! The PDP orchestrator (§4.6): evaluates a request against its root policy
//! and reduces the result to a binary decision under a configured strategy.

use super::strategy::DecisionStrategy;
use crate::error::ConfigError;
use crate::eval::policy;
use crate::model::context::EvaluationContext;
use crate::model::decision::EvaluationResult;
use crate::model::request::{AuthzDecision, AuthzRequest, DecisionDetails};
use crate::predicate::Predicate;
use chrono::Utc;

/// The top-level orchestrator a host constructs once (with its chosen
/// [`Predicate`] and [`DecisionStrategy`]) and then drives per request. Holds
/// no mutable state, so distinct calls to [`Pdp::authorize`] may run
/// concurrently on separate threads without coordination (§5).
pub struct Pdp {
    predicate: Box<dyn Predicate + Send + Sync>,
    strategy: DecisionStrategy,
}

impl Pdp {
    pub fn new(predicate: impl Predicate + Send + Sync + 'static, strategy: DecisionStrategy) -> Self {
        Self {
            predicate: Box::new(predicate),
            strategy,
        }
    }

    /// Evaluates the root policy of `request` and returns the raw
    /// seven-outcome result, without reducing it to a decision.
    #[tracing::instrument(skip(self, request), fields(root = %request.root_policy.id()))]
    pub fn evaluate(&self, request: &AuthzRequest) -> Result<EvaluationResult, ConfigError> {
        let ctx = EvaluationContext {
            subject: request.subject.clone(),
            resource: request.resource.clone(),
            action: request.action.clone(),
            environment: request.environment.clone(),
        };
        policy::evaluate(&ctx, &request.root_policy, self.predicate.as_ref())
    }

    /// Evaluates `request` and reduces the result to an [`AuthzDecision`]
    /// under the configured [`DecisionStrategy`] (§4.6).
    #[tracing::instrument(skip(self, request), fields(root = %request.root_policy.id()))]
    pub fn authorize(&self, request: &AuthzRequest) -> Result<AuthzDecision, ConfigError> {
        let result = self.evaluate(request)?;
        let decision = self.strategy.reduce(&result);

        let details = match &result {
            EvaluationResult::Indeterminate { cause }
            | EvaluationResult::IndeterminateDeny { cause }
            | EvaluationResult::IndeterminatePermit { cause }
            | EvaluationResult::IndeterminateDenyPermit { cause } => {
                tracing::debug!(cause = ?cause, "authorization decision was indeterminate");
                Some(DecisionDetails::Cause(cause.clone()))
            }
            EvaluationResult::NotApplicable => {
                Some(DecisionDetails::Message("No policy applicable".into()))
            }
            EvaluationResult::Permit | EvaluationResult::Deny => None,
        };

        Ok(AuthzDecision {
            decision,
            timestamp: Utc::now().timestamp_millis(),
            details,
        })
    }
}
