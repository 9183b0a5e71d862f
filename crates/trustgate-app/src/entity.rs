//! Entity loading: JSON parsing plus credential screening.

use anyhow::Context;
use serde_json::Value as JsonValue;
use time::OffsetDateTime;
use trustgate_credentials::screen_credential;
use trustgate_domain::model::Entity;

/// Attribute key under which the screening summary is recorded.
const SCREENING_DETAIL_KEY: &str = "credential_screening";

/// Parse an entity document, deriving the `verified` flag from credential
/// screening when the caller did not set it explicitly.
///
/// An explicit `verified` field is always taken as-is: the engine consumes
/// prior verifier output and never re-verifies.
pub fn load_entity(text: &str, now: OffsetDateTime) -> anyhow::Result<Entity> {
    let raw: JsonValue = serde_json::from_str(text).context("parse entity json")?;
    let has_explicit_flag = raw.get("verified").is_some();

    let mut entity: Entity = serde_json::from_value(raw).context("deserialize entity")?;

    if !has_explicit_flag
        && let Some(credential) = entity.credential.clone()
    {
        let verification = screen_credential(&credential, now);
        entity.verified = verification.is_valid;
        entity.verification_details.insert(
            SCREENING_DETAIL_KEY.to_string(),
            serde_json::to_value(&verification).context("serialize screening summary")?,
        );
    }

    Ok(entity)
}
