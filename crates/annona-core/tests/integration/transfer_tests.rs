//! Transfer pipeline scenarios against the stub catalog.

use annona_core::{AppError, TransferConfig, TransferService, write_datasets};

use super::common::StubCatalog;

const CATALOG_URL: &str = "https://data.example.org";

#[tokio::test]
async fn test_end_to_end_single_package() {
    let catalog = StubCatalog::new(CATALOG_URL).with_package(
        "ds1",
        r#"{
            "id": "ds1",
            "title": "Rainfall Data",
            "notes": "<p>Annual totals</p>",
            "author": "John Smith",
            "resources": [{"url": "http://x/data.csv", "format": "CSV"}]
        }"#,
    );

    let outcome = TransferService::new(catalog).run().await.unwrap();

    assert_eq!(outcome.stats.mapped, 1);
    assert_eq!(outcome.datasets.len(), 1);

    let dataset = &outcome.datasets[0];
    assert_eq!(dataset.name, "Rainfall Data");
    assert_eq!(dataset.description, "Annual totals");
    assert_eq!(dataset.creator.len(), 1);
    assert_eq!(dataset.creator[0].given_name, "John");
    assert_eq!(dataset.creator[0].family_name, "Smith");
    assert_eq!(dataset.distribution.len(), 1);
    assert_eq!(dataset.distribution[0].content_url, "http://x/data.csv");
    assert_eq!(dataset.distribution[0].encoding_format.as_deref(), Some("CSV"));
}

#[tokio::test]
async fn test_run_preserves_catalog_order() {
    let catalog = StubCatalog::new(CATALOG_URL)
        .with_package("b", r#"{"id": "b", "title": "Second"}"#)
        .with_package("a", r#"{"id": "a", "title": "First"}"#)
        .with_package("c", r#"{"id": "c", "title": "Third"}"#);

    let outcome = TransferService::new(catalog).run().await.unwrap();

    let ids: Vec<&str> = outcome
        .datasets
        .iter()
        .map(|d| d.identifier.as_str())
        .collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[tokio::test]
async fn test_listing_failure_aborts_run() {
    let catalog = StubCatalog::new(CATALOG_URL).failing_listing();

    let err = TransferService::new(catalog).run().await.unwrap_err();
    assert!(matches!(err, AppError::NetworkError(_)));
}

#[tokio::test]
async fn test_transport_failure_mid_batch_aborts_run() {
    let catalog = StubCatalog::new(CATALOG_URL)
        .with_package("ok", r#"{"id": "ok"}"#)
        .with_broken_package("broken")
        .with_package("never-reached", r#"{"id": "never-reached"}"#);

    let err = TransferService::new(catalog).run().await.unwrap_err();
    assert!(matches!(err, AppError::NetworkError(_)));
}

#[tokio::test]
async fn test_missing_package_is_skipped() {
    let catalog = StubCatalog::new(CATALOG_URL)
        .with_package("first", r#"{"id": "first"}"#)
        .with_dangling_name("ghost")
        .with_package("last", r#"{"id": "last"}"#);

    let outcome = TransferService::new(catalog).run().await.unwrap();

    assert_eq!(outcome.stats.mapped, 2);
    assert_eq!(outcome.stats.not_found, 1);
    assert_eq!(outcome.datasets.len(), 2);
    assert_eq!(outcome.datasets[1].identifier, "last");
}

#[tokio::test]
async fn test_unmappable_record_is_skipped() {
    let catalog = StubCatalog::new(CATALOG_URL)
        .with_package("good", r#"{"id": "good"}"#)
        .with_package("no-id", r#"{"title": "Record Without Identifier"}"#);

    let outcome = TransferService::new(catalog).run().await.unwrap();

    assert_eq!(outcome.stats.mapped, 1);
    assert_eq!(outcome.stats.failed, 1);
    assert_eq!(outcome.stats.total(), 2);
    assert_eq!(outcome.datasets[0].identifier, "good");
}

#[tokio::test]
async fn test_limit_truncates_processing() {
    let catalog = StubCatalog::new(CATALOG_URL)
        .with_package("one", r#"{"id": "one"}"#)
        .with_package("two", r#"{"id": "two"}"#)
        .with_package("three", r#"{"id": "three"}"#);

    let service = TransferService::with_config(catalog, TransferConfig::with_limit(2));
    let outcome = service.run().await.unwrap();

    assert_eq!(outcome.datasets.len(), 2);
    assert_eq!(outcome.datasets[1].identifier, "two");
}

#[tokio::test]
async fn test_empty_catalog_yields_empty_document() {
    let catalog = StubCatalog::new(CATALOG_URL);

    let outcome = TransferService::new(catalog).run().await.unwrap();
    assert!(outcome.datasets.is_empty());
    assert_eq!(outcome.stats.total(), 0);
}

#[tokio::test]
async fn test_outcome_serializes_to_jsonld_document() {
    let catalog = StubCatalog::new(CATALOG_URL).with_package(
        "ds1",
        r#"{
            "id": "ds1",
            "name": "rainfall",
            "title": "Rainfall Data",
            "notes": "Totals &amp; averages",
            "metadata_created": "2024-01-01T00:00:00",
            "organization": {"title": "Weather Office"}
        }"#,
    );

    let outcome = TransferService::new(catalog).run().await.unwrap();

    let mut buf = Vec::new();
    write_datasets(&mut buf, &outcome.datasets).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    let record = &value.as_array().unwrap()[0];
    assert_eq!(record["@context"], "https://schema.org");
    assert_eq!(record["@type"], "Dataset");
    assert_eq!(record["identifier"], "ds1");
    assert_eq!(record["description"], "Totals & averages");
    assert_eq!(record["url"], "https://data.example.org/dataset/rainfall");
    assert_eq!(record["datePublished"], "2024-01-01T00:00:00");
    assert_eq!(record["publisher"]["@type"], "Organization");
    assert_eq!(record["publisher"]["name"], "Weather Office");
}
