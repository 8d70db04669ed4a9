//! Domain types for the enrollment workflow context.

pub mod variants;
pub mod workflow;
