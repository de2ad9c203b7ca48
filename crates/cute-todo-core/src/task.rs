use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque task identifier. Values are issued in creation order and are
/// unique within one task sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,

    pub text: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "lenient_timestamp::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new_pending(id: TaskId, text: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Some(now),
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// `createdAt` is informational, so a value that is not an RFC 3339 string
/// reads as absent instead of rejecting the whole task.
mod lenient_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => match DateTime::parse_from_rfc3339(&text) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(err) => {
                    tracing::debug!(value = %text, error = %err, "ignoring unreadable createdAt");
                    None
                }
            },
            Some(other) => {
                tracing::debug!(value = %other, "ignoring non-string createdAt");
                None
            }
        };
        Ok(parsed)
    }
}

/// Trims raw input, rejecting text that is empty afterwards.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
