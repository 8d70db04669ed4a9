//! The enrollment workflow template.
//!
//! The step sequence and the early-exit rule live here, once. What each
//! step actually does comes from the [`EnrollmentSteps`] capability set the
//! caller passes in. Adding an enrollment channel means implementing that
//! set, never touching this function.

use collegium_core::collaborators::{ActivityLog, Notifier};
use collegium_core::role::Actor;
use collegium_courses::Course;
use collegium_people::Student;
use tracing::{info, instrument};

/// The acting identity and injected collaborators one enrollment attempt
/// runs under. Created per call, discarded after the workflow returns.
pub struct EnrollmentContext<'a> {
    /// The actor performing the enrollment; the role-gate on
    /// [`Course::enroll`] interrogates it.
    pub actor: &'a dyn Actor,
    /// Progress and failure reporting. Observational only.
    pub log: &'a dyn ActivityLog,
    /// Rejection reasons and channel-specific notices. Fire-and-forget.
    pub notifier: &'a dyn Notifier,
}

/// The capability set an enrollment channel supplies: one operation per
/// workflow step. A variant that omits a required step does not compile.
pub trait EnrollmentSteps {
    /// Step 1 — channel-specific gating condition on the student.
    fn verify_eligibility(&self, student: &Student) -> bool;

    /// Step 2 — channel-specific capacity condition on the course.
    fn check_availability(&self, course: &Course) -> bool;

    /// Step 3 — performs the enrollment mutation. The default delegates to
    /// [`Course::enroll`]; any error from the mutation (a full roster
    /// conflict, a permission denial) is downgraded to `false` at this
    /// boundary rather than propagated.
    fn register(
        &self,
        ctx: &EnrollmentContext<'_>,
        student: &mut Student,
        course: &mut Course,
    ) -> bool {
        match course.enroll(ctx.actor, student) {
            Ok(()) => true,
            Err(err) => {
                ctx.log
                    .record(&format!("registration failed: {err}"), "enrollment");
                false
            }
        }
    }

    /// Step 4 — channel-specific payment handling. Assumed to succeed;
    /// executed only after registration succeeded.
    fn process_payment(&self, ctx: &EnrollmentContext<'_>, student: &Student, course: &Course);

    /// Step 5 — channel-specific confirmation; executed only after
    /// registration succeeded.
    fn send_confirmation(&self, ctx: &EnrollmentContext<'_>, student: &Student, course: &Course);

    /// Step 6 — optional post-registration hook. Default no-op.
    fn post_registration_actions(
        &self,
        ctx: &EnrollmentContext<'_>,
        student: &Student,
        course: &Course,
    ) {
        let _ = (ctx, student, course);
    }
}

/// Runs the fixed enrollment sequence, delegating each step to `steps`.
///
/// Early exit on the first failing gate: if eligibility or availability
/// fails, no mutation is performed and later steps never run; if
/// registration fails, the attempt ends with `false` and no compensating
/// action (the mutation is atomic-or-no-op). Step failures are a normal
/// rejected outcome, not errors — `false` means "not enrolled".
#[instrument(skip_all, fields(student = Actor::name(student), course = course.name()))]
pub fn run_enrollment(
    steps: &dyn EnrollmentSteps,
    ctx: &EnrollmentContext<'_>,
    student: &mut Student,
    course: &mut Course,
) -> bool {
    ctx.log.record(
        &format!(
            "enrollment of {} into '{}' started",
            Actor::name(student),
            course.name()
        ),
        "enrollment",
    );

    if !steps.verify_eligibility(student) {
        ctx.notifier
            .notify("student does not meet the eligibility requirements");
        info!(step = "verify_eligibility", "enrollment rejected");
        return false;
    }

    if !steps.check_availability(course) {
        ctx.notifier.notify("course is not open for enrollment");
        info!(step = "check_availability", "enrollment rejected");
        return false;
    }

    if !steps.register(ctx, student, course) {
        ctx.notifier.notify("registration failed");
        info!(step = "register", "enrollment rejected");
        return false;
    }

    steps.process_payment(ctx, student, course);
    steps.send_confirmation(ctx, student, course);
    steps.post_registration_actions(ctx, student, course);

    ctx.log.record(
        &format!(
            "{} successfully enrolled in '{}'",
            Actor::name(student),
            course.name()
        ),
        "enrollment",
    );
    true
}
