mod error;
mod render;
mod request;
mod service;

pub use error::ReportError;
pub use render::render_document;
pub use request::{FieldsData, ReportRequest, ReportResponse};
pub use service::ReportService;
