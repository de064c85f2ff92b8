use bson::Document;
use ott_query::{CollectionRole, FieldLists};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Body of `POST /generate-reports`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRequest {
    #[serde(flatten)]
    pub fields: FieldLists,
    /// Anything other than a JSON object means no conditions.
    #[serde(default, deserialize_with = "lenient_conditions")]
    pub conditions: Option<Document>,
}

fn lenient_conditions<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Document>, D::Error> {
    match Value::deserialize(deserializer)? {
        map @ Value::Object(_) => Ok(Document::deserialize(map).ok()),
        _ => Ok(None),
    }
}

/// Sampled top-level keys per collection. A sample, not a schema.
///
/// Serializes as `{ "Organisation": [...], "Script": [...], "User": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsData {
    pub organisation: Vec<String>,
    pub script: Vec<String>,
    pub user: Vec<String>,
}

impl FieldsData {
    pub fn get(&self, role: CollectionRole) -> &[String] {
        match role {
            CollectionRole::Organisation => &self.organisation,
            CollectionRole::Script => &self.script,
            CollectionRole::User => &self.user,
        }
    }
}

impl Serialize for FieldsData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CollectionRole::ALL.len()))?;
        for role in CollectionRole::ALL {
            map.serialize_entry(role.label(), self.get(role))?;
        }
        map.end()
    }
}

/// Serializes as `{ "organisation": [...], "script": [...], "user": [...] }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportResponse {
    pub organisation: Vec<Value>,
    pub script: Vec<Value>,
    pub user: Vec<Value>,
}

impl ReportResponse {
    pub fn get(&self, role: CollectionRole) -> &[Value] {
        match role {
            CollectionRole::Organisation => &self.organisation,
            CollectionRole::Script => &self.script,
            CollectionRole::User => &self.user,
        }
    }
}

impl Serialize for ReportResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CollectionRole::ALL.len()))?;
        for role in CollectionRole::ALL {
            map.serialize_entry(role.report_key(), self.get(role))?;
        }
        map.end()
    }
}
