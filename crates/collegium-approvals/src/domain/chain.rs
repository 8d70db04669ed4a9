//! The approval chain: an ordered sequence of authority handlers.
//!
//! Escalation is a plain loop over tagged policy records in composition
//! order. The first handler whose ceiling accommodates the delta approves
//! and the walk stops — first-fit in call order, never smallest-ceiling
//! first.

use collegium_core::error::RegistryError;

use super::request::{ApprovalOutcome, GradeChangeRequest};

/// One authority in the chain. A handler with no ceiling is the terminal
/// authority and approves unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityHandler {
    level: String,
    max_delta: Option<u32>,
}

impl AuthorityHandler {
    /// Returns the authority level tag.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Returns the maximum delta this authority may approve, or `None` for
    /// the terminal authority.
    #[must_use]
    pub fn max_delta(&self) -> Option<u32> {
        self.max_delta
    }

    fn accommodates(&self, delta: u32) -> bool {
        self.max_delta.is_none_or(|ceiling| delta <= ceiling)
    }
}

/// An ordered approval chain. Build one with [`ApprovalChain::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalChain {
    handlers: Vec<AuthorityHandler>,
}

impl ApprovalChain {
    /// Starts composing a chain in escalation order.
    #[must_use]
    pub fn builder() -> ApprovalChainBuilder {
        ApprovalChainBuilder {
            handlers: Vec::new(),
        }
    }

    /// Returns the handlers in escalation order.
    #[must_use]
    pub fn handlers(&self) -> &[AuthorityHandler] {
        &self.handlers
    }

    /// Walks the chain until a handler approves the request.
    ///
    /// Each handler either approves (when the absolute delta is within its
    /// ceiling, or unconditionally for the terminal authority) or forwards
    /// to the next one. The first approval wins and later handlers are not
    /// consulted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Configuration`] if every handler forwarded
    /// and none remained — a chain composed without a terminal authority.
    /// Exhaustion is reported as a misconfiguration, never as a silent
    /// denial.
    pub fn handle(&self, request: &GradeChangeRequest) -> Result<ApprovalOutcome, RegistryError> {
        let delta = request.delta();
        for (escalations, handler) in self.handlers.iter().enumerate() {
            if handler.accommodates(delta) {
                return Ok(ApprovalOutcome::approved_by(handler.level(), escalations));
            }
        }
        Err(RegistryError::Configuration(format!(
            "approval chain exhausted for delta {delta}: no terminal authority composed"
        )))
    }
}

/// Consuming fluent builder for [`ApprovalChain`].
#[derive(Debug)]
pub struct ApprovalChainBuilder {
    handlers: Vec<AuthorityHandler>,
}

impl ApprovalChainBuilder {
    /// Appends an authority with the given approval ceiling.
    #[must_use]
    pub fn authority(mut self, level: impl Into<String>, max_delta: u32) -> Self {
        self.handlers.push(AuthorityHandler {
            level: level.into(),
            max_delta: Some(max_delta),
        });
        self
    }

    /// Appends the terminal authority, which approves unconditionally.
    #[must_use]
    pub fn terminal(mut self, level: impl Into<String>) -> Self {
        self.handlers.push(AuthorityHandler {
            level: level.into(),
            max_delta: None,
        });
        self
    }

    /// Finishes composition.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Configuration`] if the chain is empty, if a
    /// handler was composed after the terminal authority, or if ceilings do
    /// not strictly increase along the chain (escalation would be
    /// meaningless otherwise).
    pub fn build(self) -> Result<ApprovalChain, RegistryError> {
        if self.handlers.is_empty() {
            return Err(RegistryError::Configuration(
                "approval chain must have at least one handler".to_owned(),
            ));
        }

        let mut previous_ceiling: Option<u32> = None;
        for (position, handler) in self.handlers.iter().enumerate() {
            match handler.max_delta {
                Some(ceiling) => {
                    if let Some(previous) = previous_ceiling
                        && ceiling <= previous
                    {
                        return Err(RegistryError::Configuration(format!(
                            "authority '{}' ceiling {ceiling} does not escalate beyond {previous}",
                            handler.level
                        )));
                    }
                    previous_ceiling = Some(ceiling);
                }
                None => {
                    if position + 1 < self.handlers.len() {
                        return Err(RegistryError::Configuration(format!(
                            "terminal authority '{}' must be the last handler",
                            handler.level
                        )));
                    }
                }
            }
        }

        Ok(ApprovalChain {
            handlers: self.handlers,
        })
    }
}

#[cfg(test)]
mod tests {
    use collegium_core::error::RegistryError;
    use uuid::Uuid;

    use super::ApprovalChain;
    use crate::domain::request::GradeChangeRequest;

    fn standard_chain() -> ApprovalChain {
        ApprovalChain::builder()
            .authority("teacher", 1)
            .authority("department head", 2)
            .terminal("dean")
            .build()
            .unwrap()
    }

    fn request(old_grade: i32, new_grade: i32) -> GradeChangeRequest {
        GradeChangeRequest {
            student_id: Uuid::new_v4(),
            course: "Mathematics".to_owned(),
            old_grade,
            new_grade,
            requested_by: "Maria Ivanova".to_owned(),
        }
    }

    #[test]
    fn test_delta_within_first_ceiling_approves_at_first_handler() {
        // Arrange
        let chain = standard_chain();

        // Act
        let outcome = chain.handle(&request(4, 5)).unwrap();

        // Assert
        assert!(outcome.approved);
        assert_eq!(outcome.approver.as_deref(), Some("teacher"));
        assert_eq!(outcome.escalations, 0);
    }

    #[test]
    fn test_delta_beyond_first_ceiling_escalates_once() {
        // Arrange
        let chain = standard_chain();

        // Act
        let outcome = chain.handle(&request(3, 1)).unwrap();

        // Assert
        assert_eq!(outcome.approver.as_deref(), Some("department head"));
        assert_eq!(outcome.escalations, 1);
    }

    #[test]
    fn test_delta_beyond_every_ceiling_reaches_terminal() {
        // Arrange
        let chain = standard_chain();

        // Act
        let outcome = chain.handle(&request(2, 5)).unwrap();

        // Assert
        assert_eq!(outcome.approver.as_deref(), Some("dean"));
        assert_eq!(outcome.escalations, 2);
    }

    #[test]
    fn test_first_fit_wins_in_composition_order() {
        // A wide ceiling composed first takes the decision even though a
        // narrower one later in the chain would also accommodate the delta.
        // Arrange
        let chain = ApprovalChain::builder()
            .authority("registrar", 3)
            .terminal("dean")
            .build()
            .unwrap();

        // Act
        let outcome = chain.handle(&request(4, 5)).unwrap();

        // Assert
        assert_eq!(outcome.approver.as_deref(), Some("registrar"));
        assert_eq!(outcome.escalations, 0);
    }

    #[test]
    fn test_build_rejects_empty_chain() {
        // Act
        let result = ApprovalChain::builder().build();

        // Assert
        match result.unwrap_err() {
            RegistryError::Configuration(message) => {
                assert!(message.contains("at least one handler"));
            }
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_non_increasing_ceilings() {
        // Act
        let result = ApprovalChain::builder()
            .authority("teacher", 2)
            .authority("department head", 2)
            .terminal("dean")
            .build();

        // Assert
        assert!(matches!(
            result.unwrap_err(),
            RegistryError::Configuration(_)
        ));
    }

    #[test]
    fn test_build_rejects_handler_after_terminal() {
        // Act
        let result = ApprovalChain::builder()
            .terminal("dean")
            .authority("teacher", 1)
            .build();

        // Assert
        assert!(matches!(
            result.unwrap_err(),
            RegistryError::Configuration(_)
        ));
    }

    #[test]
    fn test_exhausted_chain_reports_misconfiguration() {
        // A chain composed without a terminal authority: exhaustion is a
        // configuration failure, not a silent denial.
        // Arrange
        let chain = ApprovalChain::builder()
            .authority("teacher", 1)
            .authority("department head", 2)
            .build()
            .unwrap();

        // Act
        let result = chain.handle(&request(2, 5));

        // Assert
        assert!(matches!(
            result.unwrap_err(),
            RegistryError::Configuration(_)
        ));
    }
}
