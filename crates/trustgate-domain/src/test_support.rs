//! Shared construction helpers for tests across the workspace.

use crate::config::EngineConfig;
use crate::model::{AttributeMap, Entity, Policy};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use time::macros::datetime;
use time::OffsetDateTime;

pub fn attributes(pairs: &[(&str, JsonValue)]) -> AttributeMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

pub fn verified_entity(id: &str, metadata: &[(&str, JsonValue)]) -> Entity {
    Entity {
        id: id.to_string(),
        name: id.to_string(),
        organization: "Test Org".to_string(),
        verified: true,
        metadata: attributes(metadata),
        ..Entity::default()
    }
}

pub fn unverified_entity(id: &str) -> Entity {
    Entity {
        verified: false,
        ..verified_entity(id, &[])
    }
}

pub fn policy(name: &str, rules: &[(&str, JsonValue)]) -> Policy {
    Policy {
        id: name.to_string(),
        name: name.to_string(),
        description: String::new(),
        rules: rules
            .iter()
            .map(|(rule, config)| (rule.to_string(), config.clone()))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub fn config_with_policies(default_policies: Vec<Policy>) -> EngineConfig {
    EngineConfig {
        default_policies,
        ..EngineConfig::standard()
    }
}

/// Fixed evaluation timestamp so decisions compare exactly.
pub fn fixed_time() -> OffsetDateTime {
    datetime!(2026-01-15 12:00:00 UTC)
}
