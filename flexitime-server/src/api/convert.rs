//! Type conversion
//!
//! Database models (`db::models`) into API models (`shared::models`)

use crate::db::models as db;
use shared::models as api;

pub fn record_id_to_string(id: &Option<surrealdb::RecordId>) -> String {
    id.as_ref().map(|id| id.to_string()).unwrap_or_default()
}

impl From<db::Flexitime> for api::Flexitime {
    fn from(f: db::Flexitime) -> Self {
        Self {
            id: f.id,
            date: f.date,
            duration: f.duration,
            note: f.note,
        }
    }
}

impl From<db::Employee> for api::Employee {
    fn from(e: db::Employee) -> Self {
        Self {
            id: record_id_to_string(&e.id),
            email: e.email,
            firstname: e.firstname,
            lastname: e.lastname,
            flexitime_accrued: e.flexitime_accrued.into_iter().map(Into::into).collect(),
            flexitime_used: e.flexitime_used.into_iter().map(Into::into).collect(),
            balance: e.balance,
            is_active: e.is_active,
        }
    }
}
