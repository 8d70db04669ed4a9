//! Shared test mocks and utilities for the Collegium registry.

mod actor;
mod clock;
mod collaborators;

pub use actor::{NamedActor, RolelessActor};
pub use clock::FixedClock;
pub use collaborators::{RecordingActivityLog, RecordingNotifier, SilentActivityLog, SilentNotifier};
