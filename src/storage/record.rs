//! Stored feedback record
//!
//! Wire shape (camelCase JSON):
//!
//! ```text
//! { "id": 1, "name": "Al", "email": "al@example.com",
//!   "message": "Great job", "createdAt": "2026-10-19T08:30:00.123Z" }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::NewFeedback;

/// A feedback entry accepted by the store.
///
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Build a record from validated input plus store-assigned metadata
    pub fn new(id: u64, feedback: NewFeedback, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: feedback.name,
            email: feedback.email,
            message: feedback.message,
            created_at,
        }
    }
}

/// ISO-8601 UTC timestamps with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
