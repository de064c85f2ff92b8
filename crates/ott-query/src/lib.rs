mod collection;
mod condition;
mod projection;
mod query;

pub use collection::CollectionRole;
pub use condition::conditions_for;
pub use projection::build_projection;
pub use query::{FieldLists, ReportQuery};
