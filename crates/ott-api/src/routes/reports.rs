use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ott_reports::{ReportRequest, ReportResponse};
use ott_source::DocumentSource;
use tracing::error;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn generate_reports<S: DocumentSource>(
    State(state): State<AppState<S>>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state
        .service
        .generate_reports(&request)
        .await
        .inspect_err(|e| error!(error = %e, "report generation failed"))?;
    Ok(Json(response))
}
