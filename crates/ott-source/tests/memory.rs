use bson::{Bson, doc};
use ott_query::ReportQuery;
use ott_source::*;

const COLLECTION: &str = "organization";

fn seeded() -> MemorySource {
    let source = MemorySource::new();
    source.insert_many(
        COLLECTION,
        vec![
            doc! { "_id": "org-1", "name": "Acme Corp", "status": "active", "seats": 50, "tags": ["a", "b"] },
            doc! { "_id": "org-2", "name": "Globex", "status": "rejected", "seats": 80_i64 },
            doc! { "_id": "org-3", "name": "Initech", "status": "active", "seats": 12.0, "closed": Bson::Null },
        ],
    );
    source
}

fn query(filter: bson::Document, projection: Option<bson::Document>) -> ReportQuery {
    ReportQuery { filter, projection }
}

fn ids(docs: &[bson::Document]) -> Vec<&str> {
    docs.iter().map(|d| d.get_str("_id").unwrap()).collect()
}

// ── find_one ────────────────────────────────────────────────────

#[tokio::test]
async fn find_one_returns_first_document() {
    let source = seeded();
    let doc = source.find_one(COLLECTION).await.unwrap().unwrap();
    assert_eq!(doc.get_str("_id").unwrap(), "org-1");
}

#[tokio::test]
async fn find_one_on_missing_collection_is_none() {
    let source = seeded();
    assert_eq!(source.find_one("script").await.unwrap(), None);
}

// ── find ────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_filter_returns_everything_in_order() {
    let source = seeded();
    let docs = source.find(COLLECTION, &ReportQuery::default()).await.unwrap();
    assert_eq!(ids(&docs), ["org-1", "org-2", "org-3"]);
    assert_eq!(docs[0], doc! { "_id": "org-1", "name": "Acme Corp", "status": "active", "seats": 50, "tags": ["a", "b"] });
}

#[tokio::test]
async fn equality_filter() {
    let source = seeded();
    let docs = source
        .find(COLLECTION, &query(doc! { "status": "active" }, None))
        .await
        .unwrap();
    assert_eq!(ids(&docs), ["org-1", "org-3"]);
}

#[tokio::test]
async fn every_condition_must_match() {
    let source = seeded();
    let docs = source
        .find(COLLECTION, &query(doc! { "status": "active", "name": "Initech" }, None))
        .await
        .unwrap();
    assert_eq!(ids(&docs), ["org-3"]);
}

#[tokio::test]
async fn numbers_compare_across_types() {
    let source = seeded();

    let docs = source
        .find(COLLECTION, &query(doc! { "seats": 80 }, None))
        .await
        .unwrap();
    assert_eq!(ids(&docs), ["org-2"]);

    let docs = source
        .find(COLLECTION, &query(doc! { "seats": 12_i64 }, None))
        .await
        .unwrap();
    assert_eq!(ids(&docs), ["org-3"]);
}

#[tokio::test]
async fn null_matches_missing_and_null() {
    let source = seeded();
    let docs = source
        .find(COLLECTION, &query(doc! { "closed": Bson::Null }, None))
        .await
        .unwrap();
    assert_eq!(ids(&docs), ["org-1", "org-2", "org-3"]);
}

#[tokio::test]
async fn scalar_matches_array_element() {
    let source = seeded();
    let docs = source
        .find(COLLECTION, &query(doc! { "tags": "b" }, None))
        .await
        .unwrap();
    assert_eq!(ids(&docs), ["org-1"]);
}

#[tokio::test]
async fn unknown_field_matches_nothing() {
    let source = seeded();
    let docs = source
        .find(COLLECTION, &query(doc! { "region": "emea" }, None))
        .await
        .unwrap();
    assert!(docs.is_empty());
}

#[tokio::test]
async fn projection_keeps_id_and_named_fields() {
    let source = seeded();
    let docs = source
        .find(COLLECTION, &query(doc! {}, Some(doc! { "status": 1, "name": 1 })))
        .await
        .unwrap();
    assert_eq!(docs[1], doc! { "_id": "org-2", "name": "Globex", "status": "rejected" });
}

#[tokio::test]
async fn projection_of_absent_field_leaves_only_id() {
    let source = seeded();
    let docs = source
        .find(COLLECTION, &query(doc! {}, Some(doc! { "missing": 1 })))
        .await
        .unwrap();
    assert_eq!(docs[0], doc! { "_id": "org-1" });
}

#[test]
fn insert_many_appends() {
    let source = seeded();
    source.insert_many(COLLECTION, vec![doc! { "_id": "org-4" }]);
    assert_eq!(source.count(COLLECTION), 4);
    assert_eq!(source.count("ottuser"), 0);
}
