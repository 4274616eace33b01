use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reporters::dtos::{
    CreateReporterDto, ReporterResponseDto, UpdateReporterDto,
};
use crate::features::reporters::services::ReporterService;
use crate::shared::types::ApiResponse;

/// Create a reporter through the direct CRUD surface
pub async fn create_reporter(
    State(service): State<Arc<ReporterService>>,
    AppJson(dto): AppJson<CreateReporterDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReporterResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reporter = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(reporter), None)),
    ))
}

/// Update a reporter
pub async fn update_reporter(
    State(service): State<Arc<ReporterService>>,
    AppJson(dto): AppJson<UpdateReporterDto>,
) -> Result<Json<ApiResponse<ReporterResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reporter = service.update(dto).await?;
    Ok(Json(ApiResponse::success(Some(reporter), None)))
}

/// Delete a reporter by id (unconditional hard delete)
pub async fn delete_reporter(
    State(service): State<Arc<ReporterService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some(format!("Reporter {} deleted", id)),
    )))
}

/// Get a reporter by id
pub async fn get_reporter(
    State(service): State<Arc<ReporterService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReporterResponseDto>>> {
    let reporter = service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reporter {} not found", id)))?;

    Ok(Json(ApiResponse::success(Some(reporter), None)))
}

/// List all reporters in insertion order
pub async fn list_reporters(
    State(service): State<Arc<ReporterService>>,
) -> Result<Json<ApiResponse<Vec<ReporterResponseDto>>>> {
    let reporters = service.list().await?;
    Ok(Json(ApiResponse::success(Some(reporters), None)))
}
