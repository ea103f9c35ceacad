//! Feedback validation schema
//!
//! Defines the acceptable shape of a feedback submission and checks untyped
//! payloads against it before anything reaches storage.
//!
//! # Rules
//!
//! - `name`: string, at least 2 characters
//! - `email`: string, valid email syntax
//! - `message`: string, at least 5 characters
//! - Any other field is ignored and stripped

mod errors;
mod types;
mod validator;

pub use errors::{FieldIssue, SchemaResult, ValidationError};
pub use types::{
    Constraint, FieldRule, NewFeedback, FEEDBACK_FIELDS, MESSAGE_MIN_CHARS, NAME_MIN_CHARS,
};
pub use validator::{is_valid_email, FeedbackSchema};
