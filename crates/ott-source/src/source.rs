use std::future::Future;

use bson::Document;
use ott_query::ReportQuery;

use crate::error::SourceError;

/// Read access to named document collections.
///
/// Handlers only ever see this trait, so the production database and the
/// in-memory source used by tests are interchangeable.
pub trait DocumentSource: Send + Sync + 'static {
    /// Any one document of `collection`, with no filter and no sort.
    /// `None` when the collection is empty or missing.
    fn find_one(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Option<Document>, SourceError>> + Send;

    /// Every document matching `query.filter`, shaped by `query.projection`,
    /// in the source's iteration order.
    fn find(
        &self,
        collection: &str,
        query: &ReportQuery,
    ) -> impl Future<Output = Result<Vec<Document>, SourceError>> + Send;
}
