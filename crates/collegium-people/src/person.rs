//! Shared person profile and the `Person` trait.

use collegium_core::error::RegistryError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and contact data shared by every person record.
///
/// Construction accepts the data as given — imported records may carry
/// legacy contact data, and channel-specific eligibility checks decide what
/// to do with it. Mutation is validated: every setter fails with
/// [`RegistryError::Validation`] rather than coercing a bad value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    id: Uuid,
    name: String,
    age: u32,
    email: String,
}

impl PersonProfile {
    /// Creates a profile with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Returns the person identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's age.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Returns the person's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Sets the name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the name is empty or
    /// whitespace-only.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::validation("name", "must not be empty"));
        }
        self.name = name;
        Ok(())
    }

    /// Sets the age.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the age is zero.
    pub fn set_age(&mut self, age: u32) -> Result<(), RegistryError> {
        if age == 0 {
            return Err(RegistryError::validation("age", "must be positive"));
        }
        self.age = age;
        Ok(())
    }

    /// Sets the email address.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the address contains no `@`.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), RegistryError> {
        let email = email.into();
        if !email.contains('@') {
            return Err(RegistryError::validation("email", "must contain '@'"));
        }
        self.email = email;
        Ok(())
    }
}

/// Trait implemented by every person record in the registry.
///
/// Records also implement [`Actor`](collegium_core::role::Actor) so the
/// role-gate can interrogate them; a well-formed person always reports its
/// role.
pub trait Person {
    /// Returns the shared profile.
    fn profile(&self) -> &PersonProfile;

    /// Returns the record's role tag, as used by the role-gate.
    fn role(&self) -> &'static str;
}
