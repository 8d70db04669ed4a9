//! The student record.

use std::collections::HashMap;

use collegium_core::error::RegistryError;
use collegium_core::role::Actor;
use serde::{Deserialize, Serialize};

use crate::person::{Person, PersonProfile};

/// A student: profile plus registry number, course list, and grade book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    profile: PersonProfile,
    student_id: u32,
    courses: Vec<String>,
    grades: HashMap<String, i32>,
}

impl Student {
    /// Creates a student with an empty course list and grade book.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        student_id: u32,
    ) -> Self {
        Self {
            profile: PersonProfile::new(name, age, email),
            student_id,
            courses: Vec::new(),
            grades: HashMap::new(),
        }
    }

    /// Returns the student's registry number.
    #[must_use]
    pub fn student_id(&self) -> u32 {
        self.student_id
    }

    /// Returns the mutable shared profile.
    pub fn profile_mut(&mut self) -> &mut PersonProfile {
        &mut self.profile
    }

    /// Returns the courses the student is recorded in, in insertion order.
    #[must_use]
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Adds a course to the student's list. Idempotent.
    pub fn add_course(&mut self, course: impl Into<String>) {
        let course = course.into();
        if !self.courses.contains(&course) {
            self.courses.push(course);
        }
    }

    /// Returns the recorded grade for `course`, if any.
    #[must_use]
    pub fn grade(&self, course: &str) -> Option<i32> {
        self.grades.get(course).copied()
    }

    /// Returns the full grade book.
    #[must_use]
    pub fn grades(&self) -> &HashMap<String, i32> {
        &self.grades
    }

    /// Records a grade for `course`, adding the course to the student's
    /// list if it is not there yet.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the grade is outside the
    /// 1–5 range.
    pub fn set_grade(&mut self, course: &str, grade: i32) -> Result<(), RegistryError> {
        if !(1..=5).contains(&grade) {
            return Err(RegistryError::validation(
                "grade",
                "must be between 1 and 5",
            ));
        }
        self.add_course(course);
        self.grades.insert(course.to_owned(), grade);
        Ok(())
    }
}

impl Person for Student {
    fn profile(&self) -> &PersonProfile {
        &self.profile
    }

    fn role(&self) -> &'static str {
        "student"
    }
}

impl Actor for Student {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn role(&self) -> Option<&str> {
        Some(Person::role(self))
    }
}
