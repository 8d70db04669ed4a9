//! The course record and its role-gated enrollment mutation.

use std::collections::HashMap;
use std::fmt::Write as _;

use collegium_core::error::RegistryError;
use collegium_core::role::{Actor, authorize};
use collegium_people::{Person, Student};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roles permitted to perform the enrollment mutation.
const ENROLLMENT_ROLES: &[&str] = &["teacher", "admin"];

/// A course: identity, owning teacher, roster, schedule, and materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: Uuid,
    name: String,
    teacher_id: Uuid,
    roster: Vec<Uuid>,
    schedule: HashMap<String, u32>,
    materials: Vec<String>,
}

impl Course {
    /// Creates a course with an empty roster.
    #[must_use]
    pub fn new(name: impl Into<String>, teacher_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            teacher_id,
            roster: Vec::new(),
            schedule: HashMap::new(),
            materials: Vec::new(),
        }
    }

    /// Returns the course identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning teacher's person identifier.
    #[must_use]
    pub fn teacher_id(&self) -> Uuid {
        self.teacher_id
    }

    /// Returns the enrolled students' person identifiers, in enrollment
    /// order.
    #[must_use]
    pub fn roster(&self) -> &[Uuid] {
        &self.roster
    }

    /// Returns the number of enrolled students.
    #[must_use]
    pub fn enrolled_count(&self) -> usize {
        self.roster.len()
    }

    /// Enrolls a student. This is the registry's single role-gated
    /// mutation: only actors holding one of the permitted roles may invoke
    /// it.
    ///
    /// On success the student joins the roster and the course name joins
    /// the student's course list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::PermissionDenied`] if the actor's role does
    /// not permit enrollment, or [`RegistryError::Validation`] if the
    /// student is already on the roster.
    pub fn enroll(&mut self, actor: &dyn Actor, student: &mut Student) -> Result<(), RegistryError> {
        authorize(actor, ENROLLMENT_ROLES, "enroll student")?;

        let student_id = student.profile().id();
        if self.roster.contains(&student_id) {
            return Err(RegistryError::validation(
                "roster",
                format!("student '{}' is already enrolled", Actor::name(student)),
            ));
        }

        self.roster.push(student_id);
        student.add_course(self.name.clone());
        Ok(())
    }

    /// Removes a student from the roster if present.
    pub fn withdraw(&mut self, student: &Student) {
        let student_id = student.profile().id();
        self.roster.retain(|id| *id != student_id);
    }

    /// Sets the scheduled hour for a weekday.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the day is empty or the
    /// hour is not a valid hour of day.
    pub fn set_schedule(&mut self, day: impl Into<String>, hour: u32) -> Result<(), RegistryError> {
        let day = day.into();
        if day.trim().is_empty() {
            return Err(RegistryError::validation("day", "must not be empty"));
        }
        if hour >= 24 {
            return Err(RegistryError::validation("hour", "must be below 24"));
        }
        self.schedule.insert(day, hour);
        Ok(())
    }

    /// Returns the schedule as weekday-to-hour entries.
    #[must_use]
    pub fn schedule(&self) -> &HashMap<String, u32> {
        &self.schedule
    }

    /// Adds a lecture to the course materials.
    pub fn add_lecture(&mut self, lecture: impl Into<String>) {
        self.materials.push(lecture.into());
    }

    /// Returns the course materials, in insertion order.
    #[must_use]
    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    /// Produces a human-readable roster report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut report = format!("Course report: {}\n", self.name);
        let _ = writeln!(report, "Enrolled students: {}", self.roster.len());
        for (position, student_id) in self.roster.iter().enumerate() {
            let _ = writeln!(report, "{}. {student_id}", position + 1);
        }
        report
    }
}
