//! Employee API handlers

use super::{
    AppState,
    auth::AuthenticatedUser,
    error::{ApiError, ApiResult, MessageResponse},
};
use crate::{
    config::users::ROLE_USER,
    core::employee as service,
    entities::{EmployeeModel, EmployeeRecord, EmployeeStatus},
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::info;

fn body(payload: Result<Json<EmployeeRecord>, JsonRejection>) -> ApiResult<EmployeeRecord> {
    payload
        .map(|Json(record)| record)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn employee_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// List all active employees
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<EmployeeModel>>> {
    let employees = service::list_active(&state.db).await?;
    Ok(Json(employees))
}

/// Get an active employee by id
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<EmployeeModel>> {
    let id = employee_id(path)?;
    service::get_active(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Create an employee. Any `id` or `status` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EmployeeModel>)> {
    let input = body(payload)?;
    let record = EmployeeRecord {
        id: None,
        status: EmployeeStatus::Active,
        ..input
    };

    let employee = service::save(&state.db, record).await?;
    info!("Created employee {}", employee.id);
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Replace the names and dates of an active employee
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> ApiResult<Json<EmployeeModel>> {
    let id = employee_id(path)?;
    let changes = body(payload)?;
    service::update_active(&state.db, id, changes)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Soft delete an active employee. Requires the `USER` role.
pub async fn delete(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    user.require_role(ROLE_USER)?;
    let id = employee_id(path)?;

    service::deactivate(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!(username = %user.username, "Employee {} deleted", id);
    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new("Resource deleted successfully")),
    ))
}
