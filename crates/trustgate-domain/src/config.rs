use crate::model::Policy;
use serde_json::json;
use std::collections::BTreeMap;
use trustgate_types::ids;

/// How the evaluator treats rule names with no registered rule function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownRules {
    /// Unrecognized rules pass, so policies written for newer engines are
    /// never blocked by older ones.
    Permissive,
    /// Unrecognized rules fail their policy. Guards against a typo'd rule
    /// name silently granting trust.
    Strict,
}

/// Minimum aggregate score required for acceptance.
pub const DEFAULT_ACCEPT_THRESHOLD: f64 = 0.7;

/// Engine configuration, fixed at construction time.
///
/// There is no ambient default-policy state: the fallback policy set lives
/// here and travels with the engine instance.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub profile: String,
    pub accept_threshold: f64,
    pub unknown_rules: UnknownRules,

    /// Applied when a source entity carries no policies of its own, so
    /// evaluation is always well-defined.
    pub default_policies: Vec<Policy>,
}

impl EngineConfig {
    /// The stock configuration: 0.7 threshold, permissive unknown-rule
    /// handling, and the builtin default policy pair.
    pub fn standard() -> Self {
        Self {
            profile: "standard".to_string(),
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
            unknown_rules: UnknownRules::Permissive,
            default_policies: default_policy_pair(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// The builtin default policy set: a minimum ESG bar, and a jurisdiction
/// policy preferring major markets while blocking sanctioned ones.
pub fn default_policy_pair() -> Vec<Policy> {
    vec![
        Policy {
            id: "default-esg".to_string(),
            name: "ESG Compliance".to_string(),
            description: "Minimum ESG score requirement".to_string(),
            rules: BTreeMap::from([(ids::RULE_ESG_SCORE.to_string(), json!({ "min": 60 }))]),
        },
        Policy {
            id: "default-jurisdiction".to_string(),
            name: "Jurisdiction Trust".to_string(),
            description: "Acceptable jurisdictions for business".to_string(),
            rules: BTreeMap::from([(
                ids::RULE_JURISDICTION.to_string(),
                json!({
                    "preferred": ["EU", "US", "CA", "UK", "AU"],
                    "blocked": [ids::JURISDICTION_SANCTIONED],
                }),
            )]),
        },
    ]
}
