use super::utils;
use crate::model::AttributeMap;
use serde_json::{json, Value as JsonValue};
use trustgate_types::{ids, RuleOutcome};

const FALLBACK_SIZE: &str = "medium";

/// Size classes accepted when the policy does not configure its own list.
const DEFAULT_ALLOWED: [&str; 4] = ["small", "medium", "large", "enterprise"];

pub(super) fn run(config: &JsonValue, attributes: &AttributeMap) -> RuleOutcome {
    let observed = utils::raw_observed(attributes, ids::RULE_ORGANIZATION_SIZE);

    if !config.is_object() {
        return utils::degraded(
            "organization_size rule config must be a table".to_string(),
            observed,
            config,
        );
    }

    let allowed = match utils::string_list(config, "allowed") {
        Ok(Some(list)) => list,
        Ok(None) => DEFAULT_ALLOWED.iter().map(|s| s.to_string()).collect(),
        Err(reason) => return utils::degraded(reason, observed, config),
    };

    let value =
        match utils::observed_string(attributes, ids::RULE_ORGANIZATION_SIZE, FALLBACK_SIZE) {
            Ok(value) => value,
            Err(reason) => return utils::degraded(reason, observed, config),
        };

    let passed = allowed.contains(&value);
    let verb = if passed { "is" } else { "is not" };
    utils::outcome(
        passed,
        format!("organization size {value} {verb} in the allowed list"),
        json!(value),
        config,
    )
}
