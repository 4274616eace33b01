use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{ReportResponseDto, SubmitReportDto, UpdateReportDto};
use crate::features::reports::services::ReportWorkflow;
use crate::shared::types::ApiResponse;

/// Submit a new report through the workflow
pub async fn submit_report(
    State(workflow): State<Arc<ReportWorkflow>>,
    AppJson(dto): AppJson<SubmitReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = workflow.submit(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(report), None)),
    ))
}

/// Update an existing report through the workflow
pub async fn update_report(
    State(workflow): State<Arc<ReportWorkflow>>,
    AppJson(dto): AppJson<UpdateReportDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = workflow.update(dto).await?;
    Ok(Json(ApiResponse::success(Some(report), None)))
}

/// Delete a report by id (unconditional hard delete)
pub async fn delete_report(
    State(workflow): State<Arc<ReportWorkflow>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    workflow.remove(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some(format!("Report {} deleted", id)),
    )))
}

/// Get a report by id
pub async fn get_report(
    State(workflow): State<Arc<ReportWorkflow>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = workflow
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

    Ok(Json(ApiResponse::success(Some(report), None)))
}

/// List all reports in insertion order
pub async fn list_reports(
    State(workflow): State<Arc<ReportWorkflow>>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = workflow.list().await?;
    Ok(Json(ApiResponse::success(Some(reports), None)))
}
