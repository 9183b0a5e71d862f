//! The `verify` use case: evaluate trust and produce a decision envelope.

use crate::entity::load_entity;
use anyhow::Context;
use time::OffsetDateTime;
use trustgate_domain::TrustDecisionEngine;
use trustgate_settings::{Overrides, ResolvedConfig};
use trustgate_types::{DecisionEnvelope, ToolMeta, TrustDecision, SCHEMA_DECISION_V1};

/// Input for the verify use case.
#[derive(Clone, Debug)]
pub struct VerifyInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Source entity JSON document.
    pub source_json: &'a str,
    /// Target entity JSON document.
    pub target_json: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the verify use case.
#[derive(Clone, Debug)]
pub struct VerifyOutput {
    /// The generated decision envelope.
    pub envelope: DecisionEnvelope,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the verify use case: parse config, load entities, evaluate trust,
/// produce the envelope.
pub fn run_verify(input: VerifyInput<'_>) -> anyhow::Result<VerifyOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        trustgate_settings::TrustgateConfigV1::default()
    } else {
        trustgate_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = trustgate_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let source = load_entity(input.source_json, started_at).context("load source entity")?;
    let target = load_entity(input.target_json, started_at).context("load target entity")?;

    let engine = TrustDecisionEngine::new(resolved.effective.clone());
    let decision = engine.evaluate(&source, &target, started_at);

    let finished_at = OffsetDateTime::now_utc();

    let envelope = DecisionEnvelope {
        schema: SCHEMA_DECISION_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        source_id: source.id.clone(),
        target_id: target.id.clone(),
        profile: resolved.effective.profile.clone(),
        decision,
    };

    Ok(VerifyOutput {
        envelope,
        resolved_config: resolved,
    })
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "trustgate".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map a decision to an exit code: 0 = allowed, 2 = rejected.
pub fn decision_exit_code(decision: &TrustDecision) -> i32 {
    if decision.allowed { 0 } else { 2 }
}
