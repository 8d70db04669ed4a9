//! Collegium — grade-change approval chain bounded context.
//!
//! A requested grade change is routed through an ordered sequence of
//! authorities, each allowed to approve changes up to a maximum delta,
//! escalating until one approves. The terminal authority approves
//! unconditionally.

pub mod application;
pub mod domain;
