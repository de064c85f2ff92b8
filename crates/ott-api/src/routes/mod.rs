mod fields;
mod health;
mod reports;

use axum::Router;
use axum::routing::{get, post};
use ott_source::DocumentSource;

use crate::state::AppState;

pub fn router<S: DocumentSource>() -> Router<AppState<S>> {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/fields-data", get(fields::fields_data::<S>))
        .route("/generate-reports", post(reports::generate_reports::<S>))
}
