//! Validation error types
//!
//! A rejected payload carries one issue per failing field. The display form is
//! the message returned to clients:
//!
//! `Validation error: Name must be at least 2 characters at "name"`

use std::fmt;

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name; empty for issues about the payload as a whole
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The field was absent from the payload
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "Required")
    }

    /// The field (or payload root) had the wrong JSON type
    pub fn type_mismatch(field: impl Into<String>, expected: &str, actual: &str) -> Self {
        Self::new(field, format!("Expected {}, received {}", expected, actual))
    }

    /// Whether this issue concerns the payload root rather than a field
    pub fn is_root(&self) -> bool {
        self.field.is_empty()
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{} at \"{}\"", self.reason, self.field)
        }
    }
}

/// Payload rejected by the feedback schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Build from a non-empty issue list
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Names of the failing fields, in schema order
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.field.as_str()).collect()
    }

    /// Whether `field` is among the failures
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }

    /// Reason reported for `field`, if it failed
    pub fn reason_for(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|i| i.field == field)
            .map(|i| i.reason.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, ValidationError>;
