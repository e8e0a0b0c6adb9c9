//! User domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Represents a system user
///
/// Only ever built in memory and handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Zero until something assigns an identifier
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Stored as given, not hashed
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    /// Build a user with the default role and no identifier
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: UserRole::default(),
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}

/// Check that an address has exactly one `@` with text on both sides
pub fn validate_email(email: &str) -> bool {
    if !email.contains('@') {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    matches!(parts.as_slice(), [local, domain] if !local.is_empty() && !domain.is_empty())
}

/// Validate the inputs and build a new user record
///
/// Checks run in order: name, email, password length. The first failing
/// check decides the error.
pub fn create_user(name: &str, email: &str, password: &str) -> Result<User> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    if !validate_email(email) {
        return Err(Error::InvalidEmail);
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::PasswordTooShort);
    }

    Ok(User::new(name, email, password))
}

/// Build a user without any validation or password
#[deprecated(since = "0.1.0", note = "use `create_user` instead")]
pub fn create_user_legacy(name: &str, email: &str) -> User {
    User::new(name, email, "")
}

/// Permission level of a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Guest,
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Guest,
        UserRole::User,
        UserRole::Admin,
        UserRole::SuperAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Guest => "guest",
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "super_admin",
        }
    }

    /// Parse a role name case-insensitively, falling back to `Guest`
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(UserRole::Guest)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        match self {
            UserRole::SuperAdmin => true,
            UserRole::Admin => permission != "super_admin",
            UserRole::User => matches!(permission, "read" | "write"),
            UserRole::Guest => permission == "read",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "guest" => Ok(UserRole::Guest),
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            "super_admin" => Ok(UserRole::SuperAdmin),
            other => Err(Error::Other(format!("unknown role: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@domain"));
        assert!(validate_email("john@example.com"));
        assert!(!validate_email("userdomain"));
        assert!(!validate_email(""));
        assert!(!validate_email("@domain"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("a@b@c"));
    }

    #[test]
    fn test_create_user_keeps_fields_verbatim() {
        let user = create_user("John", "john@example.com", "password123").unwrap();
        assert_eq!(user.id, 0);
        assert_eq!(user.name, "John");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.password, "password123");
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn test_create_user_rejections() {
        assert!(matches!(create_user("", "a@b", "secret1"), Err(Error::EmptyName)));
        assert!(matches!(create_user("Ann", "ab", "secret1"), Err(Error::InvalidEmail)));
        assert!(matches!(create_user("Ann", "a@b", "12345"), Err(Error::PasswordTooShort)));
        assert!(create_user("Ann", "a@b", "123456").is_ok());
    }

    #[test]
    fn test_create_user_checks_name_first() {
        let err = create_user("", "bad", "1").unwrap_err();
        assert_eq!(err.to_string(), "name cannot be empty");
    }

    #[test]
    fn test_password_length_counts_characters() {
        // six characters, twelve bytes
        assert!(create_user("Ann", "a@b", "éééééé").is_ok());
        assert!(create_user("Ann", "a@b", "ééééé").is_err());
    }

    #[test]
    #[allow(deprecated)]
    fn test_create_user_legacy_skips_validation() {
        let user = create_user_legacy("", "not-an-email");
        assert_eq!(user.email, "not-an-email");
        assert!(user.password.is_empty());
    }

    #[test]
    fn test_role_permissions() {
        assert!(UserRole::SuperAdmin.has_permission("super_admin"));
        assert!(UserRole::Admin.has_permission("delete"));
        assert!(!UserRole::Admin.has_permission("super_admin"));
        assert!(UserRole::User.has_permission("write"));
        assert!(!UserRole::User.has_permission("delete"));
        assert!(UserRole::Guest.has_permission("read"));
        assert!(!UserRole::Guest.has_permission("write"));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::parse_lenient("Super_Admin"), UserRole::SuperAdmin);
        assert_eq!(UserRole::parse_lenient("wizard"), UserRole::Guest);
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }
}
