//! Collegium Core — shared domain abstractions.
//!
//! This crate defines the error taxonomy, the role-gate, and the
//! collaborator traits (logging, notification, clock) that all bounded
//! contexts depend on. It contains no record storage and no business policy.

pub mod clock;
pub mod collaborators;
pub mod error;
pub mod role;
