//! Builtin rule functions and the registry that dispatches them.
//!
//! Rules are pure and total: malformed config degrades to a failed outcome
//! with an explanatory reason instead of raising.

use crate::model::AttributeMap;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use trustgate_types::{ids, RuleOutcome};

mod esg_score;
mod jurisdiction;
mod organization_size;
mod sector;
mod utils;


/// A rule function: pure predicate over a resolved attribute set,
/// parameterized by rule-specific config.
pub type RuleFn = fn(&JsonValue, &AttributeMap) -> RuleOutcome;

/// Maps rule names to rule functions.
///
/// New rule kinds are added by registration, not by touching dispatch.
#[derive(Clone, Debug)]
pub struct RuleRegistry {
    rules: BTreeMap<String, RuleFn>,
}

impl RuleRegistry {
    /// Registry with the builtin rule set.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(ids::RULE_ESG_SCORE, esg_score::run);
        registry.register(ids::RULE_JURISDICTION, jurisdiction::run);
        registry.register(ids::RULE_ORGANIZATION_SIZE, organization_size::run);
        registry.register(ids::RULE_SECTOR, sector::run);
        registry
    }

    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Add or replace a rule.
    pub fn register(&mut self, name: impl Into<String>, rule: RuleFn) {
        self.rules.insert(name.into(), rule);
    }

    pub fn lookup(&self, name: &str) -> Option<RuleFn> {
        self.rules.get(name).copied()
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
