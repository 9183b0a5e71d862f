use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for trustgate decision envelopes.
pub const SCHEMA_DECISION_V1: &str = "trustgate.decision.v1";

/// Outcome of one rule evaluation, produced exactly once per rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleOutcome {
    pub passed: bool,
    pub reason: String,

    /// The attribute value the rule inspected.
    pub observed: JsonValue,

    /// Echo of the rule-specific configuration (kept opaque for forward compatibility).
    pub config: JsonValue,

    /// Jurisdiction only: whether the observed value sits in the preferred
    /// list. Informational; preference never causes failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
}

/// Outcome of evaluating one policy against a resolved attribute set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyOutcome {
    pub policy_name: String,

    /// True iff every rule in the policy passed.
    pub passed: bool,

    /// Severity signal in [0,1]; halved for each failed rule. `passed` is
    /// the binary gate, `score` exists for logging and ranking.
    pub score: f64,

    pub rules: BTreeMap<String, RuleOutcome>,
}

/// Audit detail carried inside a [`TrustDecision`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionDetail {
    pub source_verified: bool,
    pub target_verified: bool,
    pub policy_outcomes: Vec<PolicyOutcome>,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub evaluated_at: OffsetDateTime,
}

/// The engine's terminal verdict for one source/target evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrustDecision {
    pub allowed: bool,
    pub reason: String,

    /// Aggregate trust score in [0,1]: mean of policy scores, clamped.
    pub score: f64,

    pub policies_passed: Vec<String>,
    pub policies_failed: Vec<String>,
    pub detail: DecisionDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Envelope handed to callers and audit sinks.
///
/// Keeping the outer shape stable lets downstream tooling parse decisions
/// without tracking engine internals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub source_id: String,
    pub target_id: String,
    pub profile: String,
    pub decision: TrustDecision,
}
