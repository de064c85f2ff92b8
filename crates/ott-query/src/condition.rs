use bson::Document;

/// Conditions whose key appears in `fields`, in condition order.
///
/// Each collection's list is tested on its own, so a key named by two lists
/// filters both collections and a key named by none filters nothing.
pub fn conditions_for(fields: &[String], conditions: &Document) -> Document {
    let mut selected = Document::new();
    for (key, value) in conditions {
        if fields.iter().any(|f| f == key) {
            selected.insert(key.clone(), value.clone());
        }
    }
    selected
}
