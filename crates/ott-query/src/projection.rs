use bson::Document;

/// Inclusion projection naming exactly `fields`.
///
/// An empty list yields `None`: the query runs without a projection and
/// returns whole documents.
pub fn build_projection(fields: &[String]) -> Option<Document> {
    if fields.is_empty() {
        return None;
    }

    let mut projection = Document::new();
    for field in fields {
        projection.insert(field.clone(), 1);
    }
    Some(projection)
}
