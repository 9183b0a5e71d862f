use super::utils;
use crate::model::AttributeMap;
use serde_json::{json, Value as JsonValue};
use trustgate_types::{ids, RuleOutcome};

/// Rule-local fallback when the attribute set lacks an ESG score. The
/// resolver normally supplies 75; this only fires on a raw attribute map.
const FALLBACK_ESG_SCORE: f64 = 50.0;

pub(super) fn run(config: &JsonValue, attributes: &AttributeMap) -> RuleOutcome {
    let observed = utils::raw_observed(attributes, ids::RULE_ESG_SCORE);

    if !config.is_object() {
        return utils::degraded(
            "esg_score rule config must be a table".to_string(),
            observed,
            config,
        );
    }

    let min = match utils::number_field(config, "min", 0.0) {
        Ok(value) => value,
        Err(reason) => return utils::degraded(reason, observed, config),
    };
    let max = match utils::number_field(config, "max", 100.0) {
        Ok(value) => value,
        Err(reason) => return utils::degraded(reason, observed, config),
    };

    let score = match attributes.get(ids::RULE_ESG_SCORE) {
        None => FALLBACK_ESG_SCORE,
        Some(value) => match value.as_f64() {
            Some(score) => score,
            None => {
                return utils::degraded(
                    "attribute 'esg_score' must be a number".to_string(),
                    observed,
                    config,
                );
            }
        },
    };

    let passed = min <= score && score <= max;
    let verb = if passed { "meets" } else { "does not meet" };
    utils::outcome(
        passed,
        format!("esg score {score} {verb} requirement ({min}-{max})"),
        json!(score),
        config,
    )
}
