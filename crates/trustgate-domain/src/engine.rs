use crate::attributes;
use crate::config::EngineConfig;
use crate::evaluator::evaluate_policy;
use crate::model::Entity;
use crate::rules::RuleRegistry;
use crate::score::aggregate_score;
use time::OffsetDateTime;
use trustgate_types::{ids, DecisionDetail, TrustDecision};

/// Orchestrates one trust evaluation: verification gate, policy selection,
/// per-policy evaluation, aggregate scoring, threshold decision.
///
/// Construction fixes the configuration and rule registry; `evaluate` is
/// read-only and safe to call concurrently.
#[derive(Clone, Debug)]
pub struct TrustDecisionEngine {
    config: EngineConfig,
    registry: RuleRegistry,
}

impl TrustDecisionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_registry(config, RuleRegistry::builtin())
    }

    /// Engine with a caller-extended rule registry.
    pub fn with_registry(config: EngineConfig, registry: RuleRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide whether interaction from `source` to `target` is permitted.
    ///
    /// `evaluated_at` is recorded in the decision detail for audit; passing
    /// it in keeps the engine clock-free and deterministic.
    pub fn evaluate(
        &self,
        source: &Entity,
        target: &Entity,
        evaluated_at: OffsetDateTime,
    ) -> TrustDecision {
        // Hard prerequisite: both sides must hold verified credentials.
        if !source.verified || !target.verified {
            return self.unverified_decision(source, target, evaluated_at);
        }

        let selected = if source.policies.is_empty() {
            &self.config.default_policies
        } else {
            &source.policies
        };

        let attributes = attributes::resolve(target);

        let mut policies_passed = Vec::new();
        let mut policies_failed = Vec::new();
        let mut policy_outcomes = Vec::with_capacity(selected.len());

        for policy in selected {
            let outcome = evaluate_policy(
                policy,
                &attributes,
                &self.registry,
                self.config.unknown_rules,
            );
            if outcome.passed {
                policies_passed.push(policy.name.clone());
            } else {
                policies_failed.push(policy.name.clone());
            }
            policy_outcomes.push(outcome);
        }

        let score = aggregate_score(&policy_outcomes);

        // A failing policy vetoes acceptance even when the aggregate score
        // clears the threshold.
        let allowed = score >= self.config.accept_threshold && policies_failed.is_empty();

        let reason = if allowed {
            ids::REASON_ACCEPTED.to_string()
        } else if policies_failed.is_empty() {
            ids::REASON_NO_POLICIES.to_string()
        } else {
            policies_failed.join(", ")
        };

        TrustDecision {
            allowed,
            reason,
            score,
            policies_passed,
            policies_failed,
            detail: DecisionDetail {
                source_verified: source.verified,
                target_verified: target.verified,
                policy_outcomes,
                evaluated_at,
            },
        }
    }

    fn unverified_decision(
        &self,
        source: &Entity,
        target: &Entity,
        evaluated_at: OffsetDateTime,
    ) -> TrustDecision {
        let reason = if !source.verified && !target.verified {
            "neither entity presents a verified credential"
        } else if !source.verified {
            "source entity lacks a verified credential"
        } else {
            "target entity lacks a verified credential"
        };

        TrustDecision {
            allowed: false,
            reason: reason.to_string(),
            score: 0.0,
            policies_passed: Vec::new(),
            policies_failed: vec![ids::GATE_CREDENTIAL_VERIFICATION.to_string()],
            detail: DecisionDetail {
                source_verified: source.verified,
                target_verified: target.verified,
                policy_outcomes: Vec::new(),
                evaluated_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        config_with_policies, fixed_time, policy, unverified_entity, verified_entity,
    };
    use serde_json::json;

    #[test]
    fn high_esg_target_is_accepted() {
        let mut source = verified_entity("agent-a", &[]);
        source.policies = vec![policy("ESG Minimum", &[("esg_score", json!({ "min": 85 }))])];
        let target = verified_entity("agent-b", &[("esg_score", json!(88))]);

        let engine = TrustDecisionEngine::new(EngineConfig::standard());
        let decision = engine.evaluate(&source, &target, fixed_time());

        assert!(decision.allowed);
        assert_eq!(decision.reason, "accepted");
        assert_eq!(decision.score, 1.0);
        assert_eq!(decision.policies_passed, vec!["ESG Minimum".to_string()]);
        assert!(decision.policies_failed.is_empty());
    }

    #[test]
    fn low_esg_target_is_rejected_with_halved_score() {
        let mut source = verified_entity("agent-a", &[]);
        source.policies = vec![policy("ESG Minimum", &[("esg_score", json!({ "min": 90 }))])];
        let target = verified_entity("agent-c", &[("esg_score", json!(45))]);

        let engine = TrustDecisionEngine::new(EngineConfig::standard());
        let decision = engine.evaluate(&source, &target, fixed_time());

        assert!(!decision.allowed);
        assert_eq!(decision.score, 0.5);
        assert_eq!(decision.policies_failed, vec!["ESG Minimum".to_string()]);
        assert_eq!(decision.reason, "ESG Minimum");
    }

    #[test]
    fn unverified_source_short_circuits() {
        let source = unverified_entity("agent-a");
        let target = verified_entity("agent-b", &[("esg_score", json!(99))]);

        let engine = TrustDecisionEngine::new(EngineConfig::standard());
        let decision = engine.evaluate(&source, &target, fixed_time());

        assert!(!decision.allowed);
        assert_eq!(decision.score, 0.0);
        assert_eq!(
            decision.policies_failed,
            vec!["credential_verification".to_string()]
        );
        assert_eq!(decision.reason, "source entity lacks a verified credential");
        assert!(decision.detail.policy_outcomes.is_empty());
    }

    #[test]
    fn unverified_target_short_circuits() {
        let source = verified_entity("agent-a", &[]);
        let target = unverified_entity("agent-b");

        let engine = TrustDecisionEngine::new(EngineConfig::standard());
        let decision = engine.evaluate(&source, &target, fixed_time());

        assert!(!decision.allowed);
        assert_eq!(decision.reason, "target entity lacks a verified credential");
    }

    #[test]
    fn both_unverified_names_both_sides() {
        let engine = TrustDecisionEngine::new(EngineConfig::standard());
        let decision = engine.evaluate(
            &unverified_entity("agent-a"),
            &unverified_entity("agent-b"),
            fixed_time(),
        );

        assert_eq!(
            decision.reason,
            "neither entity presents a verified credential"
        );
        assert!(!decision.detail.source_verified);
        assert!(!decision.detail.target_verified);
    }

    #[test]
    fn source_without_policies_uses_default_set() {
        let source = verified_entity("agent-a", &[]);
        let target = verified_entity(
            "agent-b",
            &[("esg_score", json!(70)), ("jurisdiction", json!("US"))],
        );

        let engine = TrustDecisionEngine::new(EngineConfig::standard());
        let decision = engine.evaluate(&source, &target, fixed_time());

        assert!(decision.allowed);
        assert_eq!(
            decision.policies_passed,
            vec!["ESG Compliance".to_string(), "Jurisdiction Trust".to_string()]
        );
    }

    #[test]
    fn default_set_blocks_sanctioned_jurisdiction() {
        let source = verified_entity("agent-a", &[]);
        let target = verified_entity("agent-b", &[("jurisdiction", json!("SANCTIONED"))]);

        let engine = TrustDecisionEngine::new(EngineConfig::standard());
        let decision = engine.evaluate(&source, &target, fixed_time());

        assert!(!decision.allowed);
        assert_eq!(
            decision.policies_failed,
            vec!["Jurisdiction Trust".to_string()]
        );
        // One clean pass and one halved failure average to 0.75, above the
        // threshold; the failed policy still vetoes.
        assert_eq!(decision.score, 0.75);
        assert_eq!(decision.reason, "Jurisdiction Trust");
    }

    #[test]
    fn empty_default_set_is_fail_closed() {
        let source = verified_entity("agent-a", &[]);
        let target = verified_entity("agent-b", &[]);

        let engine = TrustDecisionEngine::new(config_with_policies(Vec::new()));
        let decision = engine.evaluate(&source, &target, fixed_time());

        assert!(!decision.allowed);
        assert_eq!(decision.score, 0.0);
        assert!(decision.policies_failed.is_empty());
        assert_eq!(decision.reason, "no policies evaluated");
    }

    #[test]
    fn decision_detail_carries_outcomes_and_timestamp() {
        let mut source = verified_entity("agent-a", &[]);
        source.policies = vec![policy("ESG Minimum", &[("esg_score", json!({ "min": 60 }))])];
        let target = verified_entity("agent-b", &[("esg_score", json!(70))]);

        let engine = TrustDecisionEngine::new(EngineConfig::standard());
        let decision = engine.evaluate(&source, &target, fixed_time());

        assert_eq!(decision.detail.policy_outcomes.len(), 1);
        assert_eq!(decision.detail.evaluated_at, fixed_time());
        let outcome = &decision.detail.policy_outcomes[0];
        assert_eq!(outcome.policy_name, "ESG Minimum");
        assert!(outcome.rules.contains_key("esg_score"));
    }
}
