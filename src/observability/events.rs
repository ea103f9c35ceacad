//! Observable events
//!
//! Every log line emitted by the service carries one of these names in its
//! `event` field, so logs can be filtered without parsing free-form text.

use std::fmt;

/// Observable events in the feedback service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved from file, environment and flags
    ConfigLoaded,
    /// Server is binding its listener
    ServerStarting,
    /// Server is accepting connections
    ServerListening,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped accepting connections
    ShutdownComplete,

    // Feedback
    /// Submission validated and stored
    FeedbackAccepted,
    /// Submission failed validation
    FeedbackRejected,
    /// Request body could not be parsed as JSON
    FeedbackMalformed,
    /// Feedback list served
    FeedbackListed,

    // Storage
    /// Store read or write failed
    StorageFailure,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStarting => "SERVER_STARTING",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::FeedbackAccepted => "FEEDBACK_ACCEPTED",
            Event::FeedbackRejected => "FEEDBACK_REJECTED",
            Event::FeedbackMalformed => "FEEDBACK_MALFORMED",
            Event::FeedbackListed => "FEEDBACK_LISTED",

            Event::StorageFailure => "STORAGE_FAILURE",
        }
    }

    /// Returns true if this event indicates a server-side fault
    pub fn is_fault(&self) -> bool {
        matches!(self, Event::StorageFailure)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
