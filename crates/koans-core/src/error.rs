//! Error types for koan bodies and koan registration

use serde::Serialize;
use std::any::Any;
use std::fmt;
use thiserror::Error;

/// An equality assertion that did not hold.
///
/// Values are kept in their `Debug` rendering so a failure can outlive the
/// values that produced it and be reported uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("expected {expected}, got {actual}{suffix}", suffix = message_suffix(.message))]
pub struct AssertionFailure {
    pub expected: String,
    pub actual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(" ({})", message),
        None => String::new(),
    }
}

impl AssertionFailure {
    pub fn new<T: fmt::Debug, U: fmt::Debug>(expected: T, actual: U, message: Option<&str>) -> Self {
        Self {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
            message: message.map(str::to_string),
        }
    }
}

/// An unexpected fault inside a koan body: anything that is not a failed
/// assertion, including caught panics.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct Fault {
    pub message: String,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build a fault from a panic payload caught at the koan boundary
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let detail = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Self::new(format!("panicked: {}", detail))
    }
}

/// Error type returned by a koan body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KoanError {
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    #[error(transparent)]
    Fault(#[from] Fault),
}

impl From<std::io::Error> for KoanError {
    fn from(e: std::io::Error) -> Self {
        KoanError::Fault(Fault::new(format!("I/O error: {}", e)))
    }
}

/// Result of running a koan body
pub type KoanResult = Result<(), KoanError>;

/// Errors raised while building a suite, before anything runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuiteError {
    #[error("Koan '{0}' is already registered")]
    DuplicateName(String),

    #[error("Koan name cannot be empty")]
    EmptyName,
}
