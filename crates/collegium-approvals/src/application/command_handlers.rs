//! Command handlers for the approval chain context.
//!
//! `handle_change_grade` is the entry point callers use to request a grade
//! change: it looks up the current grade, routes the request through the
//! chain, and applies the mutation only on approval.

use collegium_core::collaborators::ActivityLog;
use collegium_core::error::RegistryError;
use collegium_core::role::Actor;
use collegium_people::{Person, Student};
use tracing::{info, instrument};

use crate::domain::chain::ApprovalChain;
use crate::domain::request::{ApprovalOutcome, GradeChangeRequest};

/// Routes a grade change through the approval chain and applies it on
/// approval. The stored grade is mutated if and only if the outcome is an
/// approval; a denied outcome leaves it untouched.
///
/// The decision is reported to the injected activity log; the log never
/// influences the outcome.
///
/// # Errors
///
/// Returns [`RegistryError::CourseNotFound`] if the student has no recorded
/// grade in `course`, [`RegistryError::Validation`] if the approved grade
/// is out of range, or [`RegistryError::Configuration`] if the chain is
/// misconfigured.
#[instrument(skip(student, requested_by, chain, log))]
pub fn handle_change_grade(
    student: &mut Student,
    course: &str,
    new_grade: i32,
    requested_by: &dyn Actor,
    chain: &ApprovalChain,
    log: &dyn ActivityLog,
) -> Result<ApprovalOutcome, RegistryError> {
    let old_grade = student
        .grade(course)
        .ok_or_else(|| RegistryError::CourseNotFound(course.to_owned()))?;

    let request = GradeChangeRequest {
        student_id: student.profile().id(),
        course: course.to_owned(),
        old_grade,
        new_grade,
        requested_by: requested_by.name().to_owned(),
    };

    let outcome = chain.handle(&request)?;
    info!(
        approved = outcome.approved,
        approver = outcome.approver.as_deref(),
        escalations = outcome.escalations,
        "grade change decided"
    );

    if outcome.approved {
        student.set_grade(course, new_grade)?;
        log.record(
            &format!(
                "grade change {old_grade} -> {new_grade} in '{course}' for student {} approved by {} (requested by {})",
                request.student_id,
                outcome.approver.as_deref().unwrap_or("<unknown>"),
                request.requested_by,
            ),
            "grades",
        );
    } else {
        log.record(
            &format!(
                "grade change {old_grade} -> {new_grade} in '{course}' for student {} was not approved",
                request.student_id,
            ),
            "grades",
        );
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use collegium_people::{Student, Teacher};
    use collegium_test_support::{RecordingActivityLog, SilentActivityLog};

    use super::handle_change_grade;
    use crate::domain::chain::ApprovalChain;
    use collegium_core::error::RegistryError;

    fn standard_chain() -> ApprovalChain {
        ApprovalChain::builder()
            .authority("teacher", 1)
            .authority("department head", 2)
            .terminal("dean")
            .build()
            .unwrap()
    }

    fn graded_student() -> Student {
        let mut student = Student::new("Ivan Petrov", 20, "petrov@mail.example", 202);
        student.set_grade("Mathematics", 4).unwrap();
        student
    }

    fn requester() -> Teacher {
        Teacher::new("Maria Ivanova", 45, "ivanova@univ.example", 101)
    }

    #[test]
    fn test_approved_change_mutates_stored_grade() {
        // Arrange
        let mut student = graded_student();
        let chain = standard_chain();
        let log = RecordingActivityLog::new();

        // Act
        let outcome =
            handle_change_grade(&mut student, "Mathematics", 5, &requester(), &chain, &log)
                .unwrap();

        // Assert
        assert!(outcome.approved);
        assert_eq!(outcome.approver.as_deref(), Some("teacher"));
        assert_eq!(student.grade("Mathematics"), Some(5));

        let records = log.records();
        assert_eq!(records.len(), 1);
        assert!(records[0].0.contains("approved by teacher"));
        assert_eq!(records[0].1, "grades");
    }

    #[test]
    fn test_unknown_course_fails_without_consulting_chain() {
        // Arrange
        let mut student = graded_student();
        let chain = standard_chain();

        // Act
        let result = handle_change_grade(
            &mut student,
            "History",
            5,
            &requester(),
            &chain,
            &SilentActivityLog,
        );

        // Assert
        match result.unwrap_err() {
            RegistryError::CourseNotFound(course) => assert_eq!(course, "History"),
            other => panic!("expected CourseNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_chain_error_leaves_stored_grade_unchanged() {
        // A chain without a terminal authority errors on a large delta; the
        // grade must remain as it was (idempotent rejection).
        // Arrange
        let mut student = graded_student();
        let chain = ApprovalChain::builder()
            .authority("teacher", 1)
            .build()
            .unwrap();

        // Act
        let result = handle_change_grade(
            &mut student,
            "Mathematics",
            1,
            &requester(),
            &chain,
            &SilentActivityLog,
        );

        // Assert
        assert!(result.is_err());
        assert_eq!(student.grade("Mathematics"), Some(4));
    }

    #[test]
    fn test_escalated_change_reports_higher_authority() {
        // Arrange
        let mut student = graded_student();
        student.set_grade("Mathematics", 3).unwrap();
        let chain = standard_chain();
        let log = RecordingActivityLog::new();

        // Act
        let outcome =
            handle_change_grade(&mut student, "Mathematics", 1, &requester(), &chain, &log)
                .unwrap();

        // Assert
        assert_eq!(outcome.approver.as_deref(), Some("department head"));
        assert_eq!(outcome.escalations, 1);
        assert_eq!(student.grade("Mathematics"), Some(1));
    }
}
