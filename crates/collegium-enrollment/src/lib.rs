//! Collegium — enrollment workflow bounded context.
//!
//! Enrollment runs a fixed step sequence (eligibility → availability →
//! registration → payment → confirmation → post-actions) with early exit
//! on the first failing gate. The concrete behavior of each step comes
//! from the active channel variant; the sequence itself never changes.

pub mod domain;

pub use domain::variants::{InPersonEnrollment, RemoteEnrollment, StandardEnrollment};
pub use domain::workflow::{EnrollmentContext, EnrollmentSteps, run_enrollment};
