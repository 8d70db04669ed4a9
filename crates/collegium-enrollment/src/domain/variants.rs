//! Enrollment channel variants.
//!
//! Each variant supplies the channel-specific policy for the fixed workflow
//! steps: who is eligible, how many seats exist, and how payment and
//! confirmation are handled.

use collegium_core::role::Actor;
use collegium_courses::Course;
use collegium_people::{Person, Student};

use super::workflow::{EnrollmentContext, EnrollmentSteps};

/// Capacity ceiling for remote courses.
const REMOTE_CAPACITY: usize = 100;

/// Capacity ceiling for seat-limited courses.
const SEATED_CAPACITY: usize = 30;

/// Minimum age for in-person enrollment.
const IN_PERSON_MINIMUM_AGE: u32 = 18;

/// Remote channel: requires a well-formed contact address, enrolls against
/// a large capacity ceiling, and confirms electronically.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteEnrollment;

impl EnrollmentSteps for RemoteEnrollment {
    fn verify_eligibility(&self, student: &Student) -> bool {
        student.profile().email().contains('@')
    }

    fn check_availability(&self, course: &Course) -> bool {
        course.enrolled_count() < REMOTE_CAPACITY
    }

    fn process_payment(&self, ctx: &EnrollmentContext<'_>, student: &Student, _course: &Course) {
        ctx.notifier.notify(&format!(
            "{}: complete your payment at the payment gateway",
            Actor::name(student)
        ));
    }

    fn send_confirmation(&self, ctx: &EnrollmentContext<'_>, student: &Student, course: &Course) {
        ctx.notifier.notify(&format!(
            "confirmation emailed to {}: you are enrolled in '{}'",
            student.profile().email(),
            course.name()
        ));
    }
}

/// In-person channel: adults only, a small seat-limited capacity, a printed
/// confirmation, and a student card issued after registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct InPersonEnrollment;

impl EnrollmentSteps for InPersonEnrollment {
    fn verify_eligibility(&self, student: &Student) -> bool {
        student.profile().age() >= IN_PERSON_MINIMUM_AGE
    }

    fn check_availability(&self, course: &Course) -> bool {
        course.enrolled_count() < SEATED_CAPACITY
    }

    fn process_payment(&self, ctx: &EnrollmentContext<'_>, student: &Student, _course: &Course) {
        ctx.notifier.notify(&format!(
            "{}: an invoice has been issued, payable at the bursar's office",
            Actor::name(student)
        ));
    }

    fn send_confirmation(&self, ctx: &EnrollmentContext<'_>, student: &Student, course: &Course) {
        ctx.notifier.notify(&format!(
            "printed enrollment notice prepared for {}: admitted to '{}'",
            Actor::name(student),
            course.name()
        ));
    }

    fn post_registration_actions(
        &self,
        ctx: &EnrollmentContext<'_>,
        student: &Student,
        _course: &Course,
    ) {
        ctx.notifier.notify(&format!(
            "student card {} issued to {}",
            student.student_id(),
            Actor::name(student)
        ));
        ctx.log.record(
            &format!("student card {} issued", student.student_id()),
            "enrollment",
        );
    }
}

/// Minimal channel for callers that need no channel-specific rules: every
/// student is eligible, the seat-limited capacity applies, and confirmation
/// is a plain notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEnrollment;

impl EnrollmentSteps for StandardEnrollment {
    fn verify_eligibility(&self, _student: &Student) -> bool {
        true
    }

    fn check_availability(&self, course: &Course) -> bool {
        course.enrolled_count() < SEATED_CAPACITY
    }

    fn process_payment(&self, _ctx: &EnrollmentContext<'_>, _student: &Student, _course: &Course) {
        // Nothing to collect on the standard path.
    }

    fn send_confirmation(&self, ctx: &EnrollmentContext<'_>, student: &Student, course: &Course) {
        ctx.notifier.notify(&format!(
            "{}: you are enrolled in '{}'",
            Actor::name(student),
            course.name()
        ));
    }
}

#[cfg(test)]
mod tests {
    use collegium_courses::Course;
    use collegium_people::{Person, Student, Teacher};
    use uuid::Uuid;

    use super::{InPersonEnrollment, RemoteEnrollment, SEATED_CAPACITY, StandardEnrollment};
    use crate::domain::workflow::EnrollmentSteps;

    #[test]
    fn test_remote_eligibility_requires_well_formed_email() {
        // Arrange
        let valid = Student::new("Ivan Petrov", 20, "petrov@mail.example", 202);
        let invalid = Student::new("Anna Sidorova", 21, "sidorova.mail.example", 203);

        // Act & Assert
        assert!(RemoteEnrollment.verify_eligibility(&valid));
        assert!(!RemoteEnrollment.verify_eligibility(&invalid));
    }

    #[test]
    fn test_in_person_eligibility_requires_minimum_age() {
        // Arrange
        let adult = Student::new("Ivan Petrov", 18, "petrov@mail.example", 202);
        let minor = Student::new("Anna Sidorova", 17, "sidorova@mail.example", 203);

        // Act & Assert
        assert!(InPersonEnrollment.verify_eligibility(&adult));
        assert!(!InPersonEnrollment.verify_eligibility(&minor));
    }

    #[test]
    fn test_seat_limited_course_is_unavailable_at_capacity() {
        // Arrange
        let teacher = Teacher::new("Maria Ivanova", 45, "ivanova@univ.example", 101);
        let mut course = Course::new("Mathematics", teacher.profile().id());
        for seat in 0..SEATED_CAPACITY {
            let mut student = Student::new(
                format!("Student {seat}"),
                20,
                format!("student{seat}@mail.example"),
                u32::try_from(seat).unwrap(),
            );
            course.enroll(&teacher, &mut student).unwrap();
        }

        // Act & Assert
        assert!(!InPersonEnrollment.check_availability(&course));
        assert!(!StandardEnrollment.check_availability(&course));
        assert!(RemoteEnrollment.check_availability(&course));
    }

    #[test]
    fn test_standard_channel_has_no_eligibility_specialization() {
        // Arrange
        let minor_with_odd_email = Student::new("Anna Sidorova", 17, "no-at-sign", 203);
        let course = Course::new("Mathematics", Uuid::new_v4());

        // Act & Assert
        assert!(StandardEnrollment.verify_eligibility(&minor_with_odd_email));
        assert!(StandardEnrollment.check_availability(&course));
    }
}
