pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use ott_reports::ReportService;
use ott_source::DocumentSource;

use crate::state::AppState;

/// The full HTTP surface over `service`.
pub fn app<S: DocumentSource>(service: ReportService<S>) -> Router {
    routes::router().with_state(AppState {
        service: Arc::new(service),
    })
}
