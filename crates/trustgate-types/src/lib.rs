//! Stable DTOs and IDs used across the trustgate workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted decision envelope
//! - stable rule-name and code constants
//! - explain registry for policy-author guidance

#![forbid(unsafe_code)]

pub mod decision;
pub mod explain;
pub mod ids;

pub use decision::{
    DecisionDetail, DecisionEnvelope, PolicyOutcome, RuleOutcome, ToolMeta, TrustDecision,
    SCHEMA_DECISION_V1,
};
pub use explain::{lookup_explanation, ExamplePair, Explanation};
