//! Per-policy evaluation: independent rules, geometric score penalty.

use crate::config::UnknownRules;
use crate::model::{AttributeMap, Policy};
use crate::rules::RuleRegistry;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use trustgate_types::{ids, PolicyOutcome, RuleOutcome};

/// Each failed rule halves the running policy score.
pub const FAILED_RULE_PENALTY: f64 = 0.5;

/// Evaluate one policy against a resolved attribute set.
///
/// Rules are independent: iteration order never affects `passed` or
/// `score`. A single failed rule forces `passed = false`; the score keeps
/// shrinking geometrically as a severity signal for logging and ranking.
pub fn evaluate_policy(
    policy: &Policy,
    attributes: &AttributeMap,
    registry: &RuleRegistry,
    unknown_rules: UnknownRules,
) -> PolicyOutcome {
    let mut passed = true;
    let mut score = 1.0;
    let mut rules = BTreeMap::new();

    for (rule_name, rule_config) in &policy.rules {
        let outcome = match registry.lookup(rule_name) {
            Some(rule) => rule(rule_config, attributes),
            None => unknown_rule_outcome(rule_name, rule_config, unknown_rules),
        };

        if !outcome.passed {
            passed = false;
            score *= FAILED_RULE_PENALTY;
        }
        rules.insert(rule_name.clone(), outcome);
    }

    PolicyOutcome {
        policy_name: policy.name.clone(),
        passed,
        score,
        rules,
    }
}

fn unknown_rule_outcome(rule_name: &str, config: &JsonValue, mode: UnknownRules) -> RuleOutcome {
    let (passed, reason) = match mode {
        UnknownRules::Permissive => (true, ids::REASON_UNRECOGNIZED_RULE.to_string()),
        UnknownRules::Strict => (
            false,
            format!("unrecognized rule '{rule_name}' rejected in strict mode"),
        ),
    };

    RuleOutcome {
        passed,
        reason,
        observed: JsonValue::Null,
        config: config.clone(),
        preferred: None,
    }
}
