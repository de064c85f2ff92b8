use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use bson::{Bson, Document};
use ott_query::ReportQuery;

use crate::error::SourceError;
use crate::source::DocumentSource;

/// In-process source with the database's top-level equality and inclusion
/// projection semantics. Documents keep insertion order.
#[derive(Default)]
pub struct MemorySource {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_many(&self, collection: &str, docs: impl IntoIterator<Item = Document>) {
        let mut collections = self
            .collections
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        collections
            .entry(collection.to_string())
            .or_default()
            .extend(docs);
    }

    pub fn count(&self, collection: &str) -> usize {
        let collections = self
            .collections
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        collections.get(collection).map_or(0, Vec::len)
    }
}

impl DocumentSource for MemorySource {
    async fn find_one(&self, collection: &str) -> Result<Option<Document>, SourceError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| SourceError::Driver(format!("lock poisoned: {e}")))?;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.first())
            .cloned())
    }

    async fn find(
        &self,
        collection: &str,
        query: &ReportQuery,
    ) -> Result<Vec<Document>, SourceError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| SourceError::Driver(format!("lock poisoned: {e}")))?;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .filter(|doc| matches(doc, &query.filter))
            .map(|doc| project(doc, query.projection.as_ref()))
            .collect())
    }
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(field, expected)| field_matches(doc.get(field), expected))
}

fn field_matches(actual: Option<&Bson>, expected: &Bson) -> bool {
    match (actual, expected) {
        // null matches a missing field as well as an explicit null
        (None, Bson::Null) => true,
        (None, _) => false,
        (Some(Bson::Array(items)), expected) if !matches!(expected, Bson::Array(_)) => {
            items.iter().any(|item| values_equal(item, expected))
        }
        (Some(actual), expected) => values_equal(actual, expected),
    }
}

fn values_equal(a: &Bson, b: &Bson) -> bool {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}

/// `_id` is always kept; other fields keep document order, not projection order.
fn project(doc: &Document, projection: Option<&Document>) -> Document {
    let Some(projection) = projection else {
        return doc.clone();
    };

    doc.iter()
        .filter(|(key, _)| key.as_str() == "_id" || projection.contains_key(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
