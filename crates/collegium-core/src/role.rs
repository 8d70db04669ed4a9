//! Role-gate — a reusable guard over role-restricted operations.

use crate::error::RegistryError;

/// An identity able to report a role for authorization checks.
pub trait Actor {
    /// Display name used in log and error messages.
    fn name(&self) -> &str;

    /// The actor's declared role, if it can report one at all.
    fn role(&self) -> Option<&str>;
}

/// Checks that `actor` holds one of `allowed_roles` before `operation` may
/// proceed. Role comparison is case-insensitive.
///
/// Pure predicate: no mutation, no side effect beyond the returned error.
///
/// # Errors
///
/// Returns [`RegistryError::PermissionDenied`] when the actor's role is not
/// in the allowed set, or when the actor cannot report a role at all.
pub fn authorize(
    actor: &dyn Actor,
    allowed_roles: &[&str],
    operation: &str,
) -> Result<(), RegistryError> {
    let Some(role) = actor.role() else {
        return Err(RegistryError::PermissionDenied {
            operation: operation.to_owned(),
            role: "<none>".to_owned(),
        });
    };

    if allowed_roles
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(role))
    {
        Ok(())
    } else {
        Err(RegistryError::PermissionDenied {
            operation: operation.to_owned(),
            role: role.to_owned(),
        })
    }
}
