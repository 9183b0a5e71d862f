use super::utils;
use crate::model::AttributeMap;
use serde_json::{json, Value as JsonValue};
use trustgate_types::{ids, RuleOutcome};

const FALLBACK_SECTOR: &str = "unknown";

pub(super) fn run(config: &JsonValue, attributes: &AttributeMap) -> RuleOutcome {
    let observed = utils::raw_observed(attributes, ids::RULE_SECTOR);

    if !config.is_object() {
        return utils::degraded(
            "sector rule config must be a table".to_string(),
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

    let value = match utils::observed_string(attributes, ids::RULE_SECTOR, FALLBACK_SECTOR) {
        Ok(value) => value,
        Err(reason) => return utils::degraded(reason, observed, config),
    };

    if blocked.contains(&value) {
        return utils::outcome(
            false,
            format!("sector {value} is blocked"),
            json!(value),
            config,
        );
    }

    if !allowed.is_empty() && !allowed.contains(&value) {
        return utils::outcome(
            false,
            format!("sector {value} is not in the allowed list"),
            json!(value),
            config,
        );
    }

    // Neither list configured means any sector is acceptable.
    utils::outcome(
        true,
        format!("sector {value} is acceptable"),
        json!(value),
        config,
    )
}
