use bson::{Bson, Document};
use serde_json::Value;

/// Plain JSON for a stored document.
///
/// Object ids render as their hex string and dates as RFC 3339; everything
/// else uses relaxed extended JSON. Key order is preserved.
pub fn render_document(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, render_value(value)))
            .collect(),
    )
}

fn render_value(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => render_document(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(render_value).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use bson::oid::ObjectId;
    use bson::{DateTime, doc};
    use serde_json::json;

    use super::*;

    #[test]
    fn object_id_renders_as_hex() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let rendered = render_document(doc! { "_id": oid, "name": "Acme" });
        assert_eq!(rendered, json!({ "_id": "65a1f0c2e4b0a1b2c3d4e5f6", "name": "Acme" }));
    }

    #[test]
    fn dates_render_as_rfc3339() {
        let rendered = render_document(doc! { "created": DateTime::from_millis(0) });
        let created = rendered["created"].as_str().unwrap();
        assert!(created.starts_with("1970-01-01T00:00:00"));
    }

    #[test]
    fn nested_values_are_rendered() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let rendered = render_document(doc! {
            "owner": { "id": oid, "seats": 3 },
            "refs": [oid, 1.5, true],
        });
        assert_eq!(
            rendered,
            json!({
                "owner": { "id": "65a1f0c2e4b0a1b2c3d4e5f6", "seats": 3 },
                "refs": ["65a1f0c2e4b0a1b2c3d4e5f6", 1.5, true],
            })
        );
    }

    #[test]
    fn key_order_is_preserved() {
        let rendered = render_document(doc! { "z": 1, "a": 2, "m": 3 });
        let keys: Vec<&String> = rendered.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
