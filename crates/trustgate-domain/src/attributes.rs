//! Attribute resolution: merge an entity's declared metadata, verifier
//! details, and credential-subject claims into one flat attribute set.

use crate::model::{AttributeMap, Entity};
use serde_json::json;
use trustgate_types::ids;

/// Key inside a credential document whose object fields become claims.
pub const CREDENTIAL_SUBJECT_KEY: &str = "credentialSubject";

/// Resolve the attribute set for an entity.
///
/// Merge order, later sources overriding earlier ones: builtin defaults,
/// free-form metadata, verifier-supplied details, credential-subject
/// claims. The most specific, most recently asserted source wins; defaults
/// only fill genuine gaps so rule evaluation never fails on missing data.
pub fn resolve(entity: &Entity) -> AttributeMap {
    let mut attributes = builtin_defaults();

    attributes.extend(entity.metadata.clone());
    attributes.extend(entity.verification_details.clone());

    if let Some(credential) = &entity.credential
        && let Some(subject) = credential.get(CREDENTIAL_SUBJECT_KEY)
        && let Some(claims) = subject.as_object()
    {
        for (key, value) in claims {
            attributes.insert(key.clone(), value.clone());
        }
    }

    attributes
}

fn builtin_defaults() -> AttributeMap {
    AttributeMap::from([
        (ids::RULE_ESG_SCORE.to_string(), json!(75)),
        (ids::RULE_JURISDICTION.to_string(), json!("EU")),
        (ids::RULE_ORGANIZATION_SIZE.to_string(), json!("medium")),
        (ids::RULE_SECTOR.to_string(), json!("technology")),
    ])
}
