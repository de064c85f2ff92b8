use bson::Document;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::collection::CollectionRole;
use crate::condition::conditions_for;
use crate::projection::build_projection;

/// Equality filter plus optional projection for a single collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportQuery {
    pub filter: Document,
    pub projection: Option<Document>,
}

/// The caller's per-collection field lists.
///
/// A list that is missing, `null` or not an array reads as empty; non-string
/// entries are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLists {
    #[serde(default, deserialize_with = "lenient_fields")]
    pub organisation_fields: Vec<String>,
    #[serde(default, deserialize_with = "lenient_fields")]
    pub script_fields: Vec<String>,
    #[serde(default, deserialize_with = "lenient_fields")]
    pub user_fields: Vec<String>,
}

impl FieldLists {
    pub fn fields(&self, role: CollectionRole) -> &[String] {
        match role {
            CollectionRole::Organisation => &self.organisation_fields,
            CollectionRole::Script => &self.script_fields,
            CollectionRole::User => &self.user_fields,
        }
    }

    /// One query per role, in `CollectionRole::ALL` order.
    pub fn plan(&self, conditions: &Document) -> [ReportQuery; 3] {
        CollectionRole::ALL.map(|role| {
            let fields = self.fields(role);
            ReportQuery {
                filter: conditions_for(fields, conditions),
                projection: build_projection(fields),
            }
        })
    }
}

fn lenient_fields<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(field) => Some(field),
            _ => None,
        })
        .collect())
}
