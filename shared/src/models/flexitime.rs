//! Flexitime Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accrual or usage event embedded in an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flexitime {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Minutes
    pub duration: i64,
    pub note: String,
}
