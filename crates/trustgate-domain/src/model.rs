use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Flat attribute lookup table consulted by rules.
pub type AttributeMap = BTreeMap<String, JsonValue>;

/// A participant whose attributes are evaluated for trust purposes.
///
/// The engine only reads entities; ownership stays with the calling
/// application.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub organization: String,

    /// Prior output of an external credential verifier. The engine never
    /// verifies credentials itself.
    pub verified: bool,

    /// Self-declared free-form attributes.
    pub metadata: AttributeMap,

    /// Details supplied by the external verifier.
    pub verification_details: AttributeMap,

    /// Credential document; its `credentialSubject` fields become claims
    /// during attribute resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<JsonValue>,

    /// Policies this entity applies to candidate targets.
    pub policies: Vec<Policy>,
}

/// A named, reusable bundle of rules a source entity applies to any
/// candidate target entity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Rule name -> opaque rule-specific configuration. An empty map is
    /// legal; such a policy trivially passes.
    pub rules: BTreeMap<String, JsonValue>,
}
