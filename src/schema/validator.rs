//! Feedback schema validator
//!
//! Validation semantics:
//! - The payload must be a JSON object
//! - `name`, `email` and `message` are required strings
//! - Every failing field is reported, in schema order
//! - Undeclared fields are ignored and dropped from the output
//! - No trimming or coercion

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::errors::{FieldIssue, SchemaResult, ValidationError};
use super::types::{Constraint, FieldRule, NewFeedback, FEEDBACK_FIELDS};

/// Local part, `@`, one or more dotted labels, alphabetic TLD.
///
/// The leading-dot and double-dot rules need look-around, which `regex` does
/// not support; they are checked separately in [`is_valid_email`].
const EMAIL_PATTERN: &str =
    r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Returns true if `candidate` is a syntactically valid email address.
pub fn is_valid_email(candidate: &str) -> bool {
    !candidate.starts_with('.') && !candidate.contains("..") && email_regex().is_match(candidate)
}

/// Validates untyped payloads against the feedback schema.
///
/// Stateless; validation is deterministic and has no side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeedbackSchema;

impl FeedbackSchema {
    pub fn new() -> Self {
        Self
    }

    /// Validates `payload` and returns the normalized submission.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every failing field, or a single
    /// root-level issue if the payload is not an object.
    pub fn validate(&self, payload: &Value) -> SchemaResult<NewFeedback> {
        let obj = payload.as_object().ok_or_else(|| {
            ValidationError::new(vec![FieldIssue::type_mismatch(
                "",
                "object",
                json_type_name(payload),
            )])
        })?;

        let [name_rule, email_rule, message_rule] = &FEEDBACK_FIELDS;

        match (
            check_field(obj, name_rule),
            check_field(obj, email_rule),
            check_field(obj, message_rule),
        ) {
            (Ok(name), Ok(email), Ok(message)) => Ok(NewFeedback::new(name, email, message)),
            (name, email, message) => Err(ValidationError::new(
                [name.err(), email.err(), message.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

/// Checks a single field's presence, type and constraint.
fn check_field<'a>(obj: &'a Map<String, Value>, rule: &FieldRule) -> Result<&'a str, FieldIssue> {
    let value = obj
        .get(rule.field)
        .ok_or_else(|| FieldIssue::required(rule.field))?;

    let text = value
        .as_str()
        .ok_or_else(|| FieldIssue::type_mismatch(rule.field, "string", json_type_name(value)))?;

    let satisfied = match rule.constraint {
        Constraint::MinChars { min, .. } => text.chars().count() >= min,
        Constraint::Email { .. } => is_valid_email(text),
    };

    if satisfied {
        Ok(text)
    } else {
        Err(FieldIssue::new(rule.field, rule.constraint.message()))
    }
}

/// JSON type name as reported in type-mismatch messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
