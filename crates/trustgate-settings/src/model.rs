use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// `trustgate.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrustgateConfigV1 {
    /// Optional schema string for tooling (`trustgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Minimum aggregate score required for acceptance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_threshold: Option<f64>,

    /// Unrecognized-rule handling: `permissive` (default) or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown_rules: Option<String>,

    /// Policies applied when a source entity carries none of its own.
    /// A non-empty list replaces the builtin default pair.
    #[serde(default)]
    pub policies: Vec<PolicyConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyConfig {
    /// Defaults to the policy name when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Map of rule name -> rule-specific config (semantics are rule-specific).
    #[serde(default)]
    pub rules: BTreeMap<String, JsonValue>,
}
