//! Structural credential screening (no cryptography).
//!
//! Screens the *shape* of a credential document: subject and issuer present,
//! expiration not passed. Signature verification belongs to an external
//! verifier whose verdict callers pass in as the `verified` flag; this crate
//! only decides whether a document is plausible enough to stand in for that
//! verdict in development and test setups.

#![forbid(unsafe_code)]

mod screen;

pub use screen::{screen_credential, CredentialCheck, CredentialVerification};
