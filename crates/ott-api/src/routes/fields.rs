use axum::Json;
use axum::extract::State;
use ott_reports::FieldsData;
use ott_source::DocumentSource;
use tracing::error;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn fields_data<S: DocumentSource>(
    State(state): State<AppState<S>>,
) -> Result<Json<FieldsData>, ApiError> {
    let data = state
        .service
        .fields_data()
        .await
        .inspect_err(|e| error!(error = %e, "field discovery failed"))?;
    Ok(Json(data))
}
