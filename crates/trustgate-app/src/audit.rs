//! Append-only audit sink for decision envelopes.

use anyhow::Context;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use trustgate_domain::fingerprint_for_decision;
use trustgate_types::DecisionEnvelope;

/// One audit log line: a stable fingerprint plus the full envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Identity hash over source id, target id, and the policy partition.
    /// Intended for dedup and trending across repeated evaluations.
    pub fingerprint: String,
    pub envelope: DecisionEnvelope,
}

pub fn audit_record(envelope: &DecisionEnvelope) -> AuditRecord {
    AuditRecord {
        fingerprint: fingerprint_for_decision(
            &envelope.source_id,
            &envelope.target_id,
            &envelope.decision.policies_passed,
            &envelope.decision.policies_failed,
        ),
        envelope: envelope.clone(),
    }
}

/// Append one record as a single JSON line.
///
/// The log is append-only; serializing writers is the caller's concern.
pub fn append_audit_record(path: &Utf8Path, record: &AuditRecord) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }

    let line = serde_json::to_string(record).context("serialize audit record")?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open audit log: {path}"))?;
    writeln!(file, "{line}").with_context(|| format!("append audit log: {path}"))?;

    Ok(())
}
