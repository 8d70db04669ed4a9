//! Collegium — course records bounded context.
//!
//! A course owns its roster, schedule, and materials. The single mutating
//! entry point the rest of the system funnels enrollment through is
//! [`Course::enroll`], which is protected by the role-gate.

pub mod course;

pub use course::Course;
