//! Collegium — person records bounded context.
//!
//! Holds the people the registry knows about: a validated shared profile,
//! the `Student` and `Teacher` records built on top of it, and the factory
//! that constructs records from tagged JSON payloads.

pub mod factory;
pub mod person;
pub mod student;
pub mod teacher;

pub use factory::{PersonEntry, PersonFactory};
pub use person::{Person, PersonProfile};
pub use student::Student;
pub use teacher::Teacher;
