//! The teacher record.

use collegium_core::role::Actor;
use serde::{Deserialize, Serialize};

use crate::person::{Person, PersonProfile};

/// A teacher: profile plus registry number and the subjects taught.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    profile: PersonProfile,
    teacher_id: u32,
    subjects: Vec<String>,
}

impl Teacher {
    /// Creates a teacher with an empty subject list.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        teacher_id: u32,
    ) -> Self {
        Self {
            profile: PersonProfile::new(name, age, email),
            teacher_id,
            subjects: Vec::new(),
        }
    }

    /// Returns the teacher's registry number.
    #[must_use]
    pub fn teacher_id(&self) -> u32 {
        self.teacher_id
    }

    /// Returns the mutable shared profile.
    pub fn profile_mut(&mut self) -> &mut PersonProfile {
        &mut self.profile
    }

    /// Returns the subjects taught, in insertion order.
    #[must_use]
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Adds a subject to the teacher's list. Idempotent.
    pub fn add_subject(&mut self, subject: impl Into<String>) {
        let subject = subject.into();
        if !self.subjects.contains(&subject) {
            self.subjects.push(subject);
        }
    }
}

impl Person for Teacher {
    fn profile(&self) -> &PersonProfile {
        &self.profile
    }

    fn role(&self) -> &'static str {
        "teacher"
    }
}

impl Actor for Teacher {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn role(&self) -> Option<&str> {
        Some(Person::role(self))
    }
}

#[cfg(test)]
mod tests {
    use collegium_core::role::Actor;

    use super::Teacher;

    #[test]
    fn test_teacher_reports_teacher_role() {
        // Arrange
        let teacher = Teacher::new("Maria Ivanova", 45, "ivanova@univ.example", 101);

        // Act & Assert
        assert_eq!(Actor::role(&teacher), Some("teacher"));
        assert_eq!(teacher.teacher_id(), 101);
    }

    #[test]
    fn test_add_subject_is_idempotent() {
        // Arrange
        let mut teacher = Teacher::new("Maria Ivanova", 45, "ivanova@univ.example", 101);

        // Act
        teacher.add_subject("Mathematics");
        teacher.add_subject("Mathematics");

        // Assert
        assert_eq!(teacher.subjects(), ["Mathematics"]);
    }
}
