use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::admins::dtos::{
    AdministratorResponseDto, CreateAdministratorDto, LoginDto, UpdateAdministratorDto,
};
use crate::features::admins::services::AdminService;
use crate::shared::types::ApiResponse;

/// Create an administrator
pub async fn create_administrator(
    State(service): State<Arc<AdminService>>,
    AppJson(dto): AppJson<CreateAdministratorDto>,
) -> Result<(StatusCode, Json<ApiResponse<AdministratorResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let admin = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(admin), None)),
    ))
}

/// Update an administrator
pub async fn update_administrator(
    State(service): State<Arc<AdminService>>,
    AppJson(dto): AppJson<UpdateAdministratorDto>,
) -> Result<Json<ApiResponse<AdministratorResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let admin = service.update(dto).await?;
    Ok(Json(ApiResponse::success(Some(admin), None)))
}

/// Delete an administrator by id
pub async fn delete_administrator(
    State(service): State<Arc<AdminService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some(format!("Administrator {} deleted", id)),
    )))
}

/// Get an administrator by id
pub async fn get_administrator(
    State(service): State<Arc<AdminService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<AdministratorResponseDto>>> {
    let admin = service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Administrator {} not found", id)))?;

    Ok(Json(ApiResponse::success(Some(admin), None)))
}

/// List all administrators
pub async fn list_administrators(
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<Vec<AdministratorResponseDto>>>> {
    let admins = service.list().await?;
    Ok(Json(ApiResponse::success(Some(admins), None)))
}

/// Authenticate an administrator.
///
/// A failed check is a 401 response, not an `AppError`: absence of the
/// credential and a wrong password are indistinguishable to the caller.
pub async fn login_administrator(
    State(service): State<Arc<AdminService>>,
    AppJson(dto): AppJson<LoginDto>,
) -> Result<(StatusCode, Json<ApiResponse<()>>)> {
    let valid = service
        .validate_credentials(&dto.credential, &dto.password)
        .await?;

    if valid {
        Ok((
            StatusCode::OK,
            Json(ApiResponse::success(
                None,
                Some("Login successful".to_string()),
            )),
        ))
    } else {
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error(
                Some("Invalid credentials".to_string()),
                None,
            )),
        ))
    }
}
