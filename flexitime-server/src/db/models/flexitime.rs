//! Flexitime Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accrual or usage event, embedded in an employee document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flexitime {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Minutes
    pub duration: i64,
    pub note: String,
}

impl Flexitime {
    /// New entry with a freshly assigned id
    pub fn new(date: DateTime<Utc>, duration: i64, note: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            duration,
            note: note.into(),
        }
    }
}
