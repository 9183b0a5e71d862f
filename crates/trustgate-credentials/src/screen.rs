use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const CHECK_SUBJECT_PRESENT: &str = "subject_present";
const CHECK_ISSUER_PRESENT: &str = "issuer_present";
const CHECK_NOT_EXPIRED: &str = "not_expired";

/// An individual screening check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialCheck {
    /// Name of the check.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Optional detail message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Result of screening one credential document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialVerification {
    pub credential_id: String,
    pub issuer: String,
    pub subject: String,
    /// True iff every screening check passed.
    pub is_valid: bool,
    pub checks: Vec<CredentialCheck>,
}

/// Screen a credential document structurally.
///
/// `now` is the caller's clock, used only for the expiration check; passing
/// it in keeps screening deterministic.
pub fn screen_credential(credential: &JsonValue, now: OffsetDateTime) -> CredentialVerification {
    let mut checks = Vec::new();

    let subject = credential.get("credentialSubject");
    let has_subject = subject.map(JsonValue::is_object).unwrap_or(false);
    checks.push(CredentialCheck {
        name: CHECK_SUBJECT_PRESENT.to_string(),
        passed: has_subject,
        detail: if has_subject {
            None
        } else {
            Some("credential has no credentialSubject object".to_string())
        },
    });

    let issuer = credential
        .get("issuer")
        .and_then(JsonValue::as_str)
        .unwrap_or_default();
    let has_issuer = !issuer.is_empty();
    checks.push(CredentialCheck {
        name: CHECK_ISSUER_PRESENT.to_string(),
        passed: has_issuer,
        detail: if has_issuer {
            None
        } else {
            Some("credential has no issuer".to_string())
        },
    });

    checks.push(expiration_check(credential, now));

    let is_valid = checks.iter().all(|check| check.passed);

    CredentialVerification {
        credential_id: string_field(credential, "id"),
        issuer: if has_issuer {
            issuer.to_string()
        } else {
            "unknown".to_string()
        },
        subject: subject
            .and_then(|value| value.get("id"))
            .and_then(JsonValue::as_str)
            .unwrap_or("unknown")
            .to_string(),
        is_valid,
        checks,
    }
}

fn expiration_check(credential: &JsonValue, now: OffsetDateTime) -> CredentialCheck {
    let (passed, detail) = match credential.get("expirationDate") {
        // No expiration declared: nothing to check.
        None => (true, None),
        Some(JsonValue::String(raw)) => match OffsetDateTime::parse(raw, &Rfc3339) {
            Ok(expires_at) if expires_at > now => (true, None),
            Ok(_) => (false, Some("credential has expired".to_string())),
            Err(_) => (
                false,
                Some(format!(
                    "expirationDate is not a valid RFC 3339 timestamp: {raw}"
                )),
            ),
        },
        Some(_) => (false, Some("expirationDate must be a string".to_string())),
    };

    CredentialCheck {
        name: CHECK_NOT_EXPIRED.to_string(),
        passed,
        detail,
    }
}

fn string_field(credential: &JsonValue, key: &str) -> String {
    credential
        .get(key)
        .and_then(JsonValue::as_str)
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    fn now() -> OffsetDateTime {
        datetime!(2026-01-15 12:00:00 UTC)
    }

    fn well_formed() -> JsonValue {
        json!({
            "id": "urn:credential:acme-1",
            "issuer": "did:example:gleif",
            "credentialSubject": {
                "id": "did:example:acme",
                "legalName": "Acme GmbH",
                "esg_score": 82
            },
            "expirationDate": "2027-01-01T00:00:00Z"
        })
    }

    #[test]
    fn well_formed_credential_is_valid() {
        let verification = screen_credential(&well_formed(), now());
        assert!(verification.is_valid);
        assert!(verification.checks.iter().all(|check| check.passed));
        assert_eq!(verification.credential_id, "urn:credential:acme-1");
        assert_eq!(verification.issuer, "did:example:gleif");
        assert_eq!(verification.subject, "did:example:acme");
    }

    #[test]
    fn missing_subject_fails() {
        let credential = json!({ "issuer": "did:example:gleif" });
        let verification = screen_credential(&credential, now());
        assert!(!verification.is_valid);
        assert!(verification
            .checks
            .iter()
            .any(|check| check.name == "subject_present" && !check.passed));
        assert_eq!(verification.subject, "unknown");
    }

    #[test]
    fn missing_issuer_fails() {
        let credential = json!({ "credentialSubject": { "id": "did:example:acme" } });
        let verification = screen_credential(&credential, now());
        assert!(!verification.is_valid);
        assert!(verification
            .checks
            .iter()
            .any(|check| check.name == "issuer_present" && !check.passed));
        assert_eq!(verification.issuer, "unknown");
    }

    #[test]
    fn expired_credential_fails() {
        let mut credential = well_formed();
        credential["expirationDate"] = json!("2025-01-01T00:00:00Z");
        let verification = screen_credential(&credential, now());
        assert!(!verification.is_valid);
        let check = verification
            .checks
            .iter()
            .find(|check| check.name == "not_expired")
            .expect("expiration check");
        assert_eq!(check.detail.as_deref(), Some("credential has expired"));
    }

    #[test]
    fn unparseable_expiration_fails() {
        let mut credential = well_formed();
        credential["expirationDate"] = json!("next tuesday");
        let verification = screen_credential(&credential, now());
        assert!(!verification.is_valid);
    }

    #[test]
    fn absent_expiration_passes() {
        let credential = json!({
            "issuer": "did:example:gleif",
            "credentialSubject": { "id": "did:example:acme" }
        });
        let verification = screen_credential(&credential, now());
        assert!(verification.is_valid);
    }

    #[test]
    fn non_object_subject_fails() {
        let credential = json!({
            "issuer": "did:example:gleif",
            "credentialSubject": "opaque"
        });
        let verification = screen_credential(&credential, now());
        assert!(!verification.is_valid);
    }
}
