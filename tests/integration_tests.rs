//! Integration tests using mock HTTP server
//!
//! Tests the full flow: configuration → planned pages → HTTP requests →
//! records → JSON lines / Parquet output

use github_batch_source::output::{write_json_lines, write_records_to_parquet};
use github_batch_source::split::PageRangePlanner;
use github_batch_source::{
    BatchSource, EntityKind, Error, FieldValue, ReadConfig, SourceConfig, ValidatedConfig,
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use pretty_assertions::assert_eq;
use std::fs::File;
use tempfile::tempdir;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "ghp_integration";

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(path).unwrap()
}

async fn mount_page(server: &MockServer, resource: &str, page: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/octocat/hello/{resource}")))
        .and(query_param("page", page))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(server)
        .await;
}

fn source(server: &MockServer, kind: EntityKind, pages: u32) -> BatchSource {
    let config = ValidatedConfig::new(TOKEN, "octocat", "hello", kind)
        .unwrap()
        .with_api_base(Url::parse(&server.uri()).unwrap());
    BatchSource::new(config)
        .unwrap()
        .with_planner(PageRangePlanner::new(pages, 2))
}

fn names(records: &[github_batch_source::Record]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|r| r.get("name").and_then(FieldValue::as_str))
        .collect()
}

// ============================================================================
// End-to-end Reads
// ============================================================================

#[tokio::test]
async fn test_read_branches_across_pages() {
    let server = MockServer::start().await;
    mount_page(&server, "branches", "1", fixture("branches_page1.json")).await;
    mount_page(&server, "branches", "2", fixture("branches_page2.json")).await;

    let output = source(&server, EntityKind::Branch, 2)
        .read(&ReadConfig::default())
        .await
        .unwrap();

    assert_eq!(names(&output.records), vec!["main", "develop", "gh-pages"]);
    assert_eq!(output.stats.splits_planned, 2);
    assert_eq!(output.stats.splits_read, 2);
    assert_eq!(output.stats.records_read, 3);
    assert_eq!(output.schema.name, "Branches");

    let main = &output.records[0];
    let contexts = main
        .get("protection")
        .and_then(FieldValue::as_record)
        .and_then(|p| p.get("requiredStatusChecks"))
        .and_then(FieldValue::as_record)
        .and_then(|c| c.get("contexts"))
        .and_then(FieldValue::as_array)
        .unwrap();
    assert_eq!(
        contexts,
        &[
            FieldValue::String("ci/build".to_string()),
            FieldValue::String("ci/test".to_string())
        ]
    );

    let develop = &output.records[1];
    assert_eq!(develop.get("protection"), Some(&FieldValue::Null));
    assert_eq!(develop.get("protected"), Some(&FieldValue::Boolean(false)));
}

#[tokio::test]
async fn test_read_from_raw_config() {
    let server = MockServer::start().await;
    mount_page(&server, "releases", "1", fixture("releases.json")).await;

    let config = SourceConfig::from_yaml_str(&format!(
        "authorizationToken: {TOKEN}\n\
         repoOwner: octocat\n\
         repoName: hello\n\
         datasetName: Releases\n\
         hostname: {}\n",
        server.uri()
    ))
    .unwrap();

    let output = BatchSource::from_config(&config)
        .unwrap()
        .read(&ReadConfig::default())
        .await
        .unwrap();

    assert_eq!(output.records.len(), 1);
    let release = &output.records[0];
    assert_eq!(release.get("tagName").and_then(FieldValue::as_str), Some("v1.0.0"));

    let assets = release.get("assets").and_then(FieldValue::as_array).unwrap();
    assert_eq!(assets.len(), 1);
    let asset = assets[0].as_record().unwrap();
    assert_eq!(asset.get("downloadCount"), Some(&FieldValue::Long(42)));
    assert_eq!(
        asset
            .get("uploader")
            .and_then(FieldValue::as_record)
            .and_then(|u| u.get("login"))
            .and_then(FieldValue::as_str),
        Some("octocat")
    );
}

#[tokio::test]
async fn test_missing_page_aborts_read() {
    let server = MockServer::start().await;
    mount_page(&server, "branches", "1", fixture("branches_page1.json")).await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/branches"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = source(&server, EntityKind::Branch, 2)
        .read(&ReadConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_missing_page_skipped_without_fail_fast() {
    let server = MockServer::start().await;
    mount_page(&server, "branches", "1", fixture("branches_page1.json")).await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/branches"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = source(&server, EntityKind::Branch, 2)
        .read(&ReadConfig::new().with_fail_fast(false))
        .await
        .unwrap();

    assert_eq!(names(&output.records), vec!["main", "develop"]);
    assert_eq!(output.stats.splits_failed, 1);
}

#[tokio::test]
async fn test_mistyped_payload_is_decode_error() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "branches",
        "1",
        r#"[{"name": "main", "protected": "yes"}]"#.to_string(),
    )
    .await;

    let err = source(&server, EntityKind::Branch, 1)
        .read(&ReadConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("protected"));
}

// ============================================================================
// Output
// ============================================================================

#[tokio::test]
async fn test_read_to_parquet_and_json_lines() {
    let server = MockServer::start().await;
    mount_page(&server, "branches", "1", fixture("branches_page1.json")).await;
    mount_page(&server, "branches", "2", fixture("branches_page2.json")).await;

    let output = source(&server, EntityKind::Branch, 2)
        .read(&ReadConfig::default())
        .await
        .unwrap();

    let dir = tempdir().unwrap();
    let parquet_path = dir.path().join("branches.parquet");
    let rows =
        write_records_to_parquet(&parquet_path, &output.schema, &output.records, None).unwrap();
    assert_eq!(rows, 3);

    let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&parquet_path).unwrap())
        .unwrap()
        .build()
        .unwrap();
    let batches: Vec<_> = reader.map(Result::unwrap).collect();
    assert_eq!(batches.iter().map(|b| b.num_rows()).sum::<usize>(), 3);
    assert_eq!(batches[0].num_columns(), output.schema.len());

    let mut lines = Vec::new();
    write_json_lines(&mut lines, &output.records).unwrap();
    let text = String::from_utf8(lines).unwrap();
    let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert_eq!(first["name"], "main");
    assert_eq!(first["commit"]["sha"], "c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc");
}
