use crate::model::AttributeMap;
use serde_json::Value as JsonValue;
use trustgate_types::RuleOutcome;

/// Build an outcome with the standard observed/config echo.
pub(super) fn outcome(
    passed: bool,
    reason: String,
    observed: JsonValue,
    config: &JsonValue,
) -> RuleOutcome {
    RuleOutcome {
        passed,
        reason,
        observed,
        config: config.clone(),
        preferred: None,
    }
}

/// Failure outcome for malformed config or attribute values. Rules degrade
/// instead of raising; the reason carries the diagnosis.
pub(super) fn degraded(reason: String, observed: JsonValue, config: &JsonValue) -> RuleOutcome {
    outcome(false, reason, observed, config)
}

/// Numeric config field with a default when absent. `Err` carries a reason
/// when the field is present but not a number.
pub(super) fn number_field(config: &JsonValue, key: &str, default: f64) -> Result<f64, String> {
    match config.get(key) {
        None => Ok(default),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| format!("rule config field '{key}' must be a number")),
    }
}

/// String-list config field. `Ok(None)` when the field is absent; string
/// entries are kept, anything else in the list is ignored.
pub(super) fn string_list(config: &JsonValue, key: &str) -> Result<Option<Vec<String>>, String> {
    match config.get(key) {
        None => Ok(None),
        Some(JsonValue::Array(items)) => Ok(Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        )),
        Some(_) => Err(format!("rule config field '{key}' must be a list of strings")),
    }
}

/// String attribute with a rule-local fallback when unset. `Err` carries a
/// reason when the attribute is present but not a string.
pub(super) fn observed_string(
    attributes: &AttributeMap,
    key: &str,
    fallback: &str,
) -> Result<String, String> {
    match attributes.get(key) {
        None => Ok(fallback.to_string()),
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| format!("attribute '{key}' must be a string")),
    }
}

/// The raw attribute value for outcome reporting, `Null` when unset.
pub(super) fn raw_observed(attributes: &AttributeMap, key: &str) -> JsonValue {
    attributes.get(key).cloned().unwrap_or(JsonValue::Null)
}
