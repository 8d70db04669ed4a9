//! Test actors — stub `Actor` implementations for tests.

use collegium_core::role::Actor;

/// An actor with an explicit name and role.
#[derive(Debug, Clone)]
pub struct NamedActor {
    /// The actor's display name.
    pub name: String,
    /// The actor's declared role.
    pub role: String,
}

impl NamedActor {
    /// Creates an actor with the given name and role.
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

impl Actor for NamedActor {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Option<&str> {
        Some(&self.role)
    }
}

/// A malformed actor that cannot report a role. Used to exercise the
/// role-gate's rejection of roleless actors.
#[derive(Debug, Clone, Copy)]
pub struct RolelessActor;

impl Actor for RolelessActor {
    fn name(&self) -> &str {
        "roleless"
    }

    fn role(&self) -> Option<&str> {
        None
    }
}
