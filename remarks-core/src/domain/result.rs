//! Result and error types for the core library

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core library error type
///
/// The validation variants carry the exact messages shown to users, so
/// callers can print `err.to_string()` without further formatting.
#[derive(Error, Debug)]
pub enum Error {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("password too short")]
    PasswordTooShort,

    #[error("invalid amount: {0:.2}")]
    InvalidAmount(Decimal),

    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("notification channel not supported: {0}")]
    UnsupportedChannel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Operation result with optional context (for JSON output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            context: None,
        }
    }

    /// Create a failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            context: None,
        }
    }

    /// Attach a context entry, e.g. the input that was rejected
    pub fn with_context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::fail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_result_ok() {
        let result: OperationResult<i32> = OperationResult::ok(42);
        assert!(result.success);
        assert_eq!(result.data, Some(42));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_operation_result_fail_with_context() {
        let result: OperationResult<i32> = OperationResult::fail("Something went wrong")
            .with_context("input", serde_json::json!("abc"));
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.error, Some("Something went wrong".to_string()));
        assert_eq!(result.context.unwrap()["input"], serde_json::json!("abc"));
    }

    #[test]
    fn test_from_result() {
        let ok: Result<i32> = Ok(42);
        let result: OperationResult<i32> = ok.into();
        assert!(result.success);

        let err: Result<i32> = Err(Error::InvalidEmail);
        let result: OperationResult<i32> = err.into();
        assert!(!result.success);
        assert_eq!(result.error.unwrap(), "invalid email format");
    }

    #[test]
    fn test_invalid_amount_message_has_two_decimals() {
        let err = Error::InvalidAmount(Decimal::new(-5, 0));
        assert_eq!(err.to_string(), "invalid amount: -5.00");
    }
}
