//! The grade-change request and its outcome.

use uuid::Uuid;

/// A requested grade change. Immutable once constructed; produced by the
/// caller and consumed by the chain, never persisted.
#[derive(Debug, Clone)]
pub struct GradeChangeRequest {
    /// The student whose grade is to change.
    pub student_id: Uuid,
    /// The course the grade belongs to.
    pub course: String,
    /// The currently recorded grade.
    pub old_grade: i32,
    /// The requested grade.
    pub new_grade: i32,
    /// Display name of the actor requesting the change.
    pub requested_by: String,
}

impl GradeChangeRequest {
    /// Returns the absolute grade delta the chain compares against
    /// authority ceilings.
    #[must_use]
    pub fn delta(&self) -> u32 {
        self.old_grade.abs_diff(self.new_grade)
    }
}

/// The chain's decision: a boolean result plus the identity of the
/// approving authority, for audit by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalOutcome {
    /// Whether the change was approved.
    pub approved: bool,
    /// The authority that approved, when approved.
    pub approver: Option<String>,
    /// How many handlers forwarded the request before the decision.
    pub escalations: usize,
}

impl ApprovalOutcome {
    /// An approval by the given authority after `escalations` forwards.
    #[must_use]
    pub fn approved_by(approver: impl Into<String>, escalations: usize) -> Self {
        Self {
            approved: true,
            approver: Some(approver.into()),
            escalations,
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::GradeChangeRequest;

    #[test]
    fn test_delta_is_absolute() {
        // Arrange
        let request = GradeChangeRequest {
            student_id: Uuid::new_v4(),
            course: "Mathematics".to_owned(),
            old_grade: 5,
            new_grade: 2,
            requested_by: "Maria Ivanova".to_owned(),
        };

        // Act & Assert
        assert_eq!(request.delta(), 3);
    }
}
