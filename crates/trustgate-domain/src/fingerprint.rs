use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a trust decision.
///
/// Identity fields:
/// - source entity id
/// - target entity id
/// - passed policy names (in evaluation order)
/// - failed policy names (in evaluation order)
///
/// Timestamps and scores are deliberately excluded so repeated evaluations
/// of the same pair with the same partition dedup in audit logs.
pub fn fingerprint_for_decision(
    source_id: &str,
    target_id: &str,
    policies_passed: &[String],
    policies_failed: &[String],
) -> String {
    let canonical = format!(
        "{source_id}|{target_id}|{}|{}",
        policies_passed.join(","),
        policies_failed.join(",")
    );

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
