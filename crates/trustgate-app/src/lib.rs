//! Use case orchestration for trustgate.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, settings, credentials, and render layers. It is intentionally thin
//! and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod entity;
mod explain;
mod report;
mod verify;

pub use audit::{append_audit_record, audit_record, AuditRecord};
pub use entity::load_entity;
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use report::{error_envelope, parse_envelope_json, serialize_envelope, to_renderable};
pub use verify::{decision_exit_code, run_verify, VerifyInput, VerifyOutput};
