//! Domain types for the approval chain context.

pub mod chain;
pub mod request;
