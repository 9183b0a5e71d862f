//! Explain registry for rules and gate codes.
//!
//! Maps rule names and codes to human-readable explanations with policy
//! authoring guidance.

use crate::ids;

/// Explanation entry for a rule or gate code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to configure or satisfy it.
    pub remediation: &'static str,
    /// Failing/passing configuration examples.
    pub examples: ExamplePair,
}

/// Failing and passing configuration examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Policy config that would reject a typical entity.
    pub before: &'static str,
    /// Policy config that accepts it.
    pub after: &'static str,
}

/// Look up an explanation by rule name or gate code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rules
        ids::RULE_ESG_SCORE => Some(explain_esg_score()),
        ids::RULE_JURISDICTION => Some(explain_jurisdiction()),
        ids::RULE_ORGANIZATION_SIZE => Some(explain_organization_size()),
        ids::RULE_SECTOR => Some(explain_sector()),

        // Gate codes
        ids::GATE_CREDENTIAL_VERIFICATION => Some(explain_credential_verification()),
        ids::GATE_SYSTEM_ERROR => Some(explain_system_error()),

        _ => None,
    }
}

/// List all known rule names.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_ESG_SCORE,
        ids::RULE_JURISDICTION,
        ids::RULE_ORGANIZATION_SIZE,
        ids::RULE_SECTOR,
    ]
}

/// List all known gate codes.
pub fn all_gate_codes() -> &'static [&'static str] {
    &[ids::GATE_CREDENTIAL_VERIFICATION, ids::GATE_SYSTEM_ERROR]
}

// --- Rule explanations ---

fn explain_esg_score() -> Explanation {
    Explanation {
        title: "ESG Score Range",
        description: "\
Checks that the target's `esg_score` attribute falls inside a numeric range.

`min` defaults to 0 and `max` to 100, so a policy usually sets only the lower
bound. A target with no resolved ESG score is treated as a moderate 50.",
        remediation: "\
Set `min` (and optionally `max`) to the range your organization accepts:
- `{\"min\": 60}` requires at least a moderate score
- `{\"min\": 80, \"max\": 100}` restricts to high performers",
        examples: ExamplePair {
            before: r#"{ "esg_score": { "min": 90 } }"#,
            after: r#"{ "esg_score": { "min": 60 } }"#,
        },
    }
}

fn explain_jurisdiction() -> Explanation {
    Explanation {
        title: "Jurisdiction Membership",
        description: "\
Checks the target's `jurisdiction` attribute against blocked, allowed, and
preferred lists.

Precedence: a blocked jurisdiction always fails, regardless of any other
list. A non-empty allowed list is exclusive. The preferred list is
informational only; it is recorded on the outcome and never causes failure.",
        remediation: "\
List sanctioned jurisdictions under `blocked`; keep `allowed` empty unless
you want an exclusive set. Use `preferred` for ranking signals:

    { \"jurisdiction\": { \"preferred\": [\"EU\", \"US\"], \"blocked\": [\"SANCTIONED\"] } }",
        examples: ExamplePair {
            before: r#"{ "jurisdiction": { "allowed": ["US"] } }"#,
            after: r#"{ "jurisdiction": { "preferred": ["EU", "US"], "blocked": ["SANCTIONED"] } }"#,
        },
    }
}

fn explain_organization_size() -> Explanation {
    Explanation {
        title: "Organization Size",
        description: "\
Checks that the target's `organization_size` attribute is one of the allowed
size classes. With no `allowed` list configured, all of `small`, `medium`,
`large`, and `enterprise` are accepted.",
        remediation: "\
Restrict `allowed` to the size classes you transact with:

    { \"organization_size\": { \"allowed\": [\"large\", \"enterprise\"] } }",
        examples: ExamplePair {
            before: r#"{ "organization_size": { "allowed": ["enterprise"] } }"#,
            after: r#"{ "organization_size": { "allowed": ["medium", "large", "enterprise"] } }"#,
        },
    }
}

fn explain_sector() -> Explanation {
    Explanation {
        title: "Sector Membership",
        description: "\
Checks the target's `sector` attribute with the same blocked-then-allowed
precedence as the jurisdiction rule. With neither list configured, any
sector is acceptable.",
        remediation: "\
Block sectors you must not transact with, or make `allowed` exclusive:

    { \"sector\": { \"blocked\": [\"gambling\"] } }",
        examples: ExamplePair {
            before: r#"{ "sector": { "allowed": ["finance"] } }"#,
            after: r#"{ "sector": { "blocked": ["gambling"] } }"#,
        },
    }
}

// --- Gate explanations ---

fn explain_credential_verification() -> Explanation {
    Explanation {
        title: "Credential Verification Gate",
        description: "\
A hard prerequisite, not a policy rule: when either entity lacks a verified
credential the engine rejects immediately with score 0.0 and no policy is
evaluated. This code appears in `policies_failed` for such rejections.",
        remediation: "\
Have the unverified side present a credential that passes screening, or
supply an explicit `\"verified\": true` flag from your own verifier.",
        examples: ExamplePair {
            before: r#"{ "id": "agent-1", "name": "Acme" }"#,
            after: r#"{ "id": "agent-1", "name": "Acme", "verified": true }"#,
        },
    }
}

fn explain_system_error() -> Explanation {
    Explanation {
        title: "System Error Rejection",
        description: "\
Emitted when the surrounding service fails before or during evaluation
(unreadable entity document, malformed config). The decision is a
conservative rejection so callers never mistake an operational failure for
an acceptance.",
        remediation: "\
Inspect the decision reason for the underlying error and fix the input
document or configuration it names.",
        examples: ExamplePair {
            before: r#"{ "id": "agent-1", "policies": "not-a-list" }"#,
            after: r#"{ "id": "agent-1", "policies": [] }"#,
        },
    }
}
