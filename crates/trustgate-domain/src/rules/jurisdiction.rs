use super::utils;
use crate::model::AttributeMap;
use serde_json::{json, Value as JsonValue};
use trustgate_types::{ids, RuleOutcome};

const FALLBACK_JURISDICTION: &str = "UNKNOWN";

pub(super) fn run(config: &JsonValue, attributes: &AttributeMap) -> RuleOutcome {
    let observed = utils::raw_observed(attributes, ids::RULE_JURISDICTION);

    if !config.is_object() {
        return utils::degraded(
            "jurisdiction rule config must be a table".to_string(),
            observed,
            config,
        );
    }

    let blocked = match utils::string_list(config, "blocked") {
        Ok(list) => list.unwrap_or_default(),
        Err(reason) => return utils::degraded(reason, observed, config),
    };
    let allowed = match utils::string_list(config, "allowed") {
        Ok(list) => list.unwrap_or_default(),
        Err(reason) => return utils::degraded(reason, observed, config),
    };
    let preferred = match utils::string_list(config, "preferred") {
        Ok(list) => list.unwrap_or_default(),
        Err(reason) => return utils::degraded(reason, observed, config),
    };

    let value = match utils::observed_string(attributes, ids::RULE_JURISDICTION, FALLBACK_JURISDICTION)
    {
        Ok(value) => value,
        Err(reason) => return utils::degraded(reason, observed, config),
    };

    // Blocked takes precedence over everything, including a matching allow.
    if blocked.contains(&value) {
        return utils::outcome(
            false,
            format!("jurisdiction {value} is blocked"),
            json!(value),
            config,
        );
    }

    if !allowed.is_empty() && !allowed.contains(&value) {
        return utils::outcome(
            false,
            format!("jurisdiction {value} is not in the allowed list"),
            json!(value),
            config,
        );
    }

    // Preference never causes failure; it is recorded for ranking only.
    let is_preferred = preferred.is_empty() || preferred.contains(&value);
    let quality = if is_preferred { "preferred" } else { "acceptable" };

    RuleOutcome {
        passed: true,
        reason: format!("jurisdiction {value} is {quality}"),
        observed: json!(value),
        config: config.clone(),
        preferred: Some(is_preferred),
    }
}
