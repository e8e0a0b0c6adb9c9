//! User service - create users and hand out in-memory identifiers

use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::result::Result;
use crate::domain::{create_user, User, UserRole};

/// User service
///
/// Identifiers come from a per-service counter starting at 1. Nothing is
/// stored; the created user is returned to the caller.
#[derive(Debug, Default)]
pub struct UserService {
    last_id: AtomicI64,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the inputs, then assign the next identifier and role
    pub fn register(&self, name: &str, email: &str, password: &str, role: UserRole) -> Result<User> {
        let mut user = create_user(name, email, password)
            .inspect_err(|e| {
                tracing::info!(error = %e, "user rejected");
            })?
            .with_role(role);

        user.id = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;

        tracing::info!(user_id = user.id, role = %user.role, "user created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::Error;

    #[test]
    fn test_ids_are_sequential() {
        let service = UserService::new();
        let a = service.register("Ann", "ann@example.com", "secret1", UserRole::User).unwrap();
        let b = service.register("Bob", "bob@example.com", "secret2", UserRole::Admin).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(b.role, UserRole::Admin);
    }

    #[test]
    fn test_rejected_user_does_not_consume_id() {
        let service = UserService::new();
        let err = service.register("Ann", "ann", "secret1", UserRole::User).unwrap_err();
        assert!(matches!(err, Error::InvalidEmail));

        let user = service.register("Ann", "ann@example.com", "secret1", UserRole::User).unwrap();
        assert_eq!(user.id, 1);
    }
}
