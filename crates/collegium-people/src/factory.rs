//! Person factory — explicit tag-to-constructor mapping.
//!
//! Construction by kind tag is table-driven: the mapping is populated at
//! startup and extensible through [`PersonFactory::register`], with no
//! implicit global registry.

use std::collections::HashMap;

use collegium_core::error::RegistryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::student::Student;
use crate::teacher::Teacher;

/// A person record of any kind; also the tagged JSON import/export shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersonEntry {
    /// A student record.
    Student(Student),
    /// A teacher record.
    Teacher(Teacher),
}

/// Constructor function for one person kind.
pub type PersonConstructor = fn(&Value) -> Result<PersonEntry, RegistryError>;

/// Maps person-kind tags to constructor functions.
pub struct PersonFactory {
    constructors: HashMap<String, PersonConstructor>,
}

fn student_from_payload(payload: &Value) -> Result<PersonEntry, RegistryError> {
    let student: Student = serde_json::from_value(payload.clone())
        .map_err(|e| RegistryError::validation("student", e.to_string()))?;
    Ok(PersonEntry::Student(student))
}

fn teacher_from_payload(payload: &Value) -> Result<PersonEntry, RegistryError> {
    let teacher: Teacher = serde_json::from_value(payload.clone())
        .map_err(|e| RegistryError::validation("teacher", e.to_string()))?;
    Ok(PersonEntry::Teacher(teacher))
}

impl PersonFactory {
    /// Creates a factory with no registered kinds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Creates a factory with the built-in kinds (`student`, `teacher`)
    /// registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut factory = Self::new();
        factory.register("student", student_from_payload);
        factory.register("teacher", teacher_from_payload);
        factory
    }

    /// Registers (or replaces) the constructor for a kind tag.
    pub fn register(&mut self, kind: impl Into<String>, constructor: PersonConstructor) {
        self.constructors.insert(kind.into(), constructor);
    }

    /// Constructs a person record of the given kind from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the kind is unknown or the
    /// payload does not match the kind's shape.
    pub fn build(&self, kind: &str, payload: &Value) -> Result<PersonEntry, RegistryError> {
        let constructor = self.constructors.get(kind).ok_or_else(|| {
            RegistryError::validation("kind", format!("unknown person kind '{kind}'"))
        })?;
        constructor(payload)
    }
}

impl Default for PersonFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{PersonEntry, PersonFactory};
    use crate::student::Student;

    #[test]
    fn test_build_constructs_student_from_payload() {
        // Arrange
        let factory = PersonFactory::with_defaults();
        let original = Student::new("Ivan Petrov", 20, "petrov@mail.example", 202);
        let payload = serde_json::to_value(&original).unwrap();

        // Act
        let entry = factory.build("student", &payload).unwrap();

        // Assert
        match entry {
            PersonEntry::Student(student) => assert_eq!(student, original),
            other => panic!("expected Student, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_unknown_kind() {
        // Arrange
        let factory = PersonFactory::with_defaults();

        // Act
        let result = factory.build("dean", &json!({}));

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_build_rejects_malformed_payload() {
        // Arrange
        let factory = PersonFactory::with_defaults();

        // Act
        let result = factory.build("teacher", &json!({ "name": "no other fields" }));

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_person_entry_round_trips_through_tagged_json() {
        // Arrange
        let original = PersonEntry::Student(
            Student::new("Anna Sidorova", 21, "sidorova@mail.example", 203),
        );

        // Act
        let serialized = serde_json::to_value(&original).unwrap();
        let restored: PersonEntry = serde_json::from_value(serialized.clone()).unwrap();

        // Assert
        assert_eq!(serialized["kind"], "student");
        assert_eq!(restored, original);
    }
}
