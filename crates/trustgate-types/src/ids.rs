//! Stable identifiers for rules and decision codes.
//!
//! Rule names double as the attribute keys they inspect, matching the shape
//! policy authors write in `rules` tables.

// Builtin rules
pub const RULE_ESG_SCORE: &str = "esg_score";
pub const RULE_JURISDICTION: &str = "jurisdiction";
pub const RULE_ORGANIZATION_SIZE: &str = "organization_size";
pub const RULE_SECTOR: &str = "sector";

// Gate codes reported in `policies_failed` outside normal policy evaluation
pub const GATE_CREDENTIAL_VERIFICATION: &str = "credential_verification";
pub const GATE_SYSTEM_ERROR: &str = "system_error";

// Sentinel jurisdiction blocked by the default policy set
pub const JURISDICTION_SANCTIONED: &str = "SANCTIONED";

// Decision reason literals
pub const REASON_ACCEPTED: &str = "accepted";
pub const REASON_NO_POLICIES: &str = "no policies evaluated";
pub const REASON_UNRECOGNIZED_RULE: &str = "unrecognized rule, skipped";
