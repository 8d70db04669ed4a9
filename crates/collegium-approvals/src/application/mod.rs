//! Application-level entry points for the approval chain context.

pub mod command_handlers;
