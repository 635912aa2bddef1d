//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::extract::Payload;
use crate::core::ServerState;
use crate::db::models::EmployeePatch;
use crate::utils::{AppError, AppResult};
use shared::models::{Employee, EmployeeList};

fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("Employee {} not found", id))
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<EmployeeList>> {
    let employees = state
        .employees
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(EmployeeList {
        employees: employees.into_iter().map(Into::into).collect(),
    }))
}

/// Get employee by id
///
/// Store errors and malformed ids are indistinguishable from a missing record.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::not_found(e.to_string()))?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(employee.into()))
}

/// Create a new employee from `email`, `firstname` and `lastname`
///
/// Any other payload key is ignored.
pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload,
) -> AppResult<Json<Employee>> {
    // Presence is checked before any value, so a missing key wins over a bad one
    let Some(employee) = EmployeePatch::from_payload(&payload).to_employee()? else {
        return Err(AppError::validation(
            "email, firstname and lastname are required",
        ));
    };

    let created = state.employees.create(employee).await?;
    tracing::info!(id = ?created.id, "Employee created");

    Ok(Json(created.into()))
}

/// Update the editable fields present in the payload
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload,
) -> AppResult<StatusCode> {
    let mut employee = state
        .employees
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::not_found(e.to_string()))?
        .ok_or_else(|| not_found(&id))?;

    let patch = EmployeePatch::from_payload(&payload);
    if patch.is_empty() {
        return Err(AppError::validation(
            "at least one of email, firstname or lastname is required",
        ));
    }
    patch.apply(&mut employee)?;

    state.employees.save(&employee).await?;
    tracing::info!(%id, "Employee updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .employees
        .remove(&id)
        .await
        .map_err(|e| AppError::not_found(e.to_string()))?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(%id, "Employee deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Known path, unsupported method
pub async fn method_not_found() -> AppError {
    AppError::not_found("Unsupported method")
}
