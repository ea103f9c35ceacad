//! Feedback schema definitions
//!
//! The accepted shape of a submission is fixed: three string fields, each
//! carrying exactly one constraint.

use serde::{Deserialize, Serialize};

/// Minimum length of the `name` field, in characters
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum length of the `message` field, in characters
pub const MESSAGE_MIN_CHARS: usize = 5;

/// A constraint applied to a string field after its type has been checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must contain at least `min` characters
    MinChars { min: usize, message: &'static str },
    /// Value must be a syntactically valid email address
    Email { message: &'static str },
}

impl Constraint {
    /// Human-readable reason reported when the constraint fails
    pub fn message(&self) -> &'static str {
        match self {
            Constraint::MinChars { message, .. } => *message,
            Constraint::Email { message } => *message,
        }
    }
}

/// A required string field and its constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
}

/// Field rules in declaration order; issues are reported in this order.
pub const FEEDBACK_FIELDS: [FieldRule; 3] = [
    FieldRule {
        field: "name",
        constraint: Constraint::MinChars {
            min: NAME_MIN_CHARS,
            message: "Name must be at least 2 characters",
        },
    },
    FieldRule {
        field: "email",
        constraint: Constraint::Email {
            message: "Please enter a valid email address",
        },
    },
    FieldRule {
        field: "message",
        constraint: Constraint::MinChars {
            min: MESSAGE_MIN_CHARS,
            message: "Message must be at least 5 characters",
        },
    },
];

/// A validated submission, stripped of everything but the three schema fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewFeedback {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}
