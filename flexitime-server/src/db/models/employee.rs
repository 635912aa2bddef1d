//! Employee Model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use surrealdb::RecordId;

use super::Flexitime;
use crate::db::repository::{RepoError, RepoResult};

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned by the store, never written back
    #[serde(default, skip_serializing)]
    pub id: Option<EmployeeId>,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub flexitime_accrued: Vec<Flexitime>,
    #[serde(default)]
    pub flexitime_used: Vec<Flexitime>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Employee {
    /// Unsaved employee with default balance, active flag and empty ledgers
    pub fn new(
        email: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            email: email.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            flexitime_accrued: Vec::new(),
            flexitime_used: Vec::new(),
            balance: 0.0,
            is_active: true,
        }
    }

    /// Append to the accrued ledger
    pub fn accrue(&mut self, entry: Flexitime) {
        self.flexitime_accrued.push(entry);
    }

    /// Append to the used ledger
    pub fn spend(&mut self, entry: Flexitime) {
        self.flexitime_used.push(entry);
    }
}

/// Editable fields found in a request payload
///
/// Only key presence is recorded here; values are checked by
/// [`field_text`] when they are applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmployeePatch<'a> {
    pub email: Option<&'a Value>,
    pub firstname: Option<&'a Value>,
    pub lastname: Option<&'a Value>,
}

impl<'a> EmployeePatch<'a> {
    /// Collect editable keys. A payload that is not a JSON object has none.
    pub fn from_payload(payload: &'a Value) -> Self {
        let Some(object) = payload.as_object() else {
            return Self::default();
        };
        Self {
            email: object.get("email"),
            firstname: object.get("firstname"),
            lastname: object.get("lastname"),
        }
    }

    /// No editable field present
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.firstname.is_none() && self.lastname.is_none()
    }

    /// Build a new employee from a complete patch
    ///
    /// Returns `Ok(None)` when any editable field is missing.
    pub fn to_employee(&self) -> RepoResult<Option<Employee>> {
        let (Some(email), Some(firstname), Some(lastname)) =
            (self.email, self.firstname, self.lastname)
        else {
            return Ok(None);
        };
        Ok(Some(Employee::new(
            field_text("email", email)?,
            field_text("firstname", firstname)?,
            field_text("lastname", lastname)?,
        )))
    }

    /// Overwrite the present fields on `employee`, leaving the rest untouched
    ///
    /// Nothing is changed if any present value is rejected.
    pub fn apply(&self, employee: &mut Employee) -> RepoResult<()> {
        let email = self.email.map(|v| field_text("email", v)).transpose()?;
        let firstname = self.firstname.map(|v| field_text("firstname", v)).transpose()?;
        let lastname = self.lastname.map(|v| field_text("lastname", v)).transpose()?;

        if let Some(email) = email {
            employee.email = email;
        }
        if let Some(firstname) = firstname {
            employee.firstname = firstname;
        }
        if let Some(lastname) = lastname {
            employee.lastname = lastname;
        }
        Ok(())
    }
}

/// Coerce a payload value into a stored text field
///
/// Strings are trimmed; numbers and booleans are cast to their text form.
/// Null, arrays, objects and blank strings violate the field constraint.
pub fn field_text(field: &str, value: &Value) -> RepoResult<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            return Err(RepoError::Validation(format!("{field} must be a text value")));
        }
    };
    if text.is_empty() {
        return Err(RepoError::Validation(format!("{field} must not be empty")));
    }
    Ok(text)
}
