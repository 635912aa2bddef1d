//! Employee Model

use serde::{Deserialize, Serialize};

use super::Flexitime;

/// Employee response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store record id (`employee:<key>`)
    pub id: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub flexitime_accrued: Vec<Flexitime>,
    pub flexitime_used: Vec<Flexitime>,
    pub balance: f64,
    pub is_active: bool,
}

/// `GET /employees` response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeList {
    pub employees: Vec<Employee>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

/// Update employee payload
///
/// Absent fields are left untouched by the server, so `None` is never sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}
