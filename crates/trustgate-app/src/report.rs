//! Envelope parsing, serialization, and the renderable projection.

use anyhow::Context;
use time::OffsetDateTime;
use trustgate_render::{RenderableDecision, RenderablePolicy, RenderableRule};
use trustgate_types::{
    ids, DecisionDetail, DecisionEnvelope, TrustDecision, SCHEMA_DECISION_V1,
};

pub fn parse_envelope_json(text: &str) -> anyhow::Result<DecisionEnvelope> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse decision json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    match schema.as_str() {
        SCHEMA_DECISION_V1 => {
            let envelope: DecisionEnvelope =
                serde_json::from_value(value).context("parse decision envelope")?;
            Ok(envelope)
        }
        _ => anyhow::bail!("unknown decision schema: {schema}"),
    }
}

pub fn serialize_envelope(envelope: &DecisionEnvelope) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(envelope).context("serialize decision envelope")
}

pub fn to_renderable(envelope: &DecisionEnvelope) -> RenderableDecision {
    RenderableDecision {
        allowed: envelope.decision.allowed,
        score: envelope.decision.score,
        reason: envelope.decision.reason.clone(),
        policies: envelope
            .decision
            .detail
            .policy_outcomes
            .iter()
            .map(|outcome| RenderablePolicy {
                name: outcome.policy_name.clone(),
                passed: outcome.passed,
                score: outcome.score,
                rules: outcome
                    .rules
                    .iter()
                    .map(|(name, rule)| RenderableRule {
                        name: name.clone(),
                        passed: rule.passed,
                        reason: rule.reason.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Well-formed rejection for runtime failures, so callers never mistake an
/// operational error for an acceptance.
pub fn error_envelope(reason: &str, profile: &str) -> DecisionEnvelope {
    let now = OffsetDateTime::now_utc();
    DecisionEnvelope {
        schema: SCHEMA_DECISION_V1.to_string(),
        tool: crate::verify::tool_meta(),
        started_at: now,
        finished_at: now,
        source_id: String::new(),
        target_id: String::new(),
        profile: profile.to_string(),
        decision: TrustDecision {
            allowed: false,
            reason: format!("trust verification error: {reason}"),
            score: 0.0,
            policies_passed: Vec::new(),
            policies_failed: vec![ids::GATE_SYSTEM_ERROR.to_string()],
            detail: DecisionDetail {
                source_verified: false,
                target_verified: false,
                policy_outcomes: Vec::new(),
                evaluated_at: now,
            },
        },
    }
}
