use std::sync::Arc;

use ott_reports::ReportService;

pub struct AppState<S> {
    pub service: Arc<ReportService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
