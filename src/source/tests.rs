use super::*;
use crate::config::ValidatedConfig;
use crate::error::Error;
use crate::fetch::stub::StubFetcher;
use crate::model::{AttrValue, EntityKind, EntityValue};
use crate::split::ListPlanner;
use crate::transform::FieldValue;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn referrer(name: &str) -> EntityValue {
    EntityValue::new("TrafficReferrer")
        .with("referrer", AttrValue::String(name.to_string()))
        .with("count", AttrValue::Integer(2))
        .with("uniques", AttrValue::Null)
}

fn page(prefix: &str, size: usize) -> Vec<EntityValue> {
    (0..size).map(|i| referrer(&format!("{prefix}{i}"))).collect()
}

fn config() -> ValidatedConfig {
    ValidatedConfig::new("ghp_secret", "octocat", "hello", EntityKind::TrafficReferrer).unwrap()
}

fn source(fetcher: StubFetcher, cursors: &[&str]) -> (BatchSource, Arc<StubFetcher>) {
    let fetcher = Arc::new(fetcher);
    let source = BatchSource::new(config())
        .unwrap()
        .with_fetcher(fetcher.clone())
        .with_planner(ListPlanner::new(cursors.iter().copied()));
    (source, fetcher)
}

fn referrers(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.get("referrer").and_then(FieldValue::as_str))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_plan_is_single_page() {
    let source = BatchSource::new(config()).unwrap();
    let splits = source.plan_splits().unwrap();
    assert_eq!(
        splits,
        vec![Split::new(
            "https://api.github.com/repos/octocat/hello/traffic/popular/referrers?per_page=100&page=1"
        )]
    );
}

#[test]
fn test_schema_is_cached_per_kind() {
    let source = BatchSource::new(config()).unwrap();
    let first = source.schema().unwrap();
    let second = source.schema().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.name, "Traffic:Referrers");
}

#[tokio::test]
async fn test_read_preserves_split_order() {
    let fetcher = StubFetcher::new()
        .with_page("p1", page("a", 2))
        .with_page("p2", page("b", 3))
        .with_page("p3", page("c", 1));
    let (source, fetcher) = source(fetcher, &["p1", "p2", "p3"]);

    let output = source
        .read(&ReadConfig::new().with_parallelism(3))
        .await
        .unwrap();

    assert_eq!(referrers(&output.records), vec!["a0", "a1", "b0", "b1", "b2", "c0"]);
    assert_eq!(output.stats.splits_planned, 3);
    assert_eq!(output.stats.splits_read, 3);
    assert_eq!(output.stats.splits_failed, 0);
    assert_eq!(output.stats.records_read, 6);
    assert_eq!(fetcher.calls(), 3);
    assert!(fetcher.credentials().iter().all(|c| c == "ghp_secret"));
}

#[tokio::test]
async fn test_records_match_schema() {
    let (source, _) = source(StubFetcher::new().with_page("p1", page("a", 1)), &["p1"]);

    let output = source.read(&ReadConfig::default()).await.unwrap();

    let record = &output.records[0];
    assert_eq!(
        record.field_names().collect::<Vec<_>>(),
        output.schema.field_names().collect::<Vec<_>>()
    );
    assert_eq!(record.get("count"), Some(&FieldValue::Long(2)));
    assert_eq!(record.get("uniques"), Some(&FieldValue::Null));
}

#[tokio::test]
async fn test_fail_fast_aborts() {
    let fetcher = StubFetcher::new().with_page("p1", page("a", 1));
    let (source, _) = source(fetcher, &["p1", "missing"]);

    let err = source.read(&ReadConfig::default()).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_failed_split_skipped_without_fail_fast() {
    let fetcher = StubFetcher::new()
        .with_page("p1", page("a", 2))
        .with_page("p3", page("c", 1));
    let (source, _) = source(fetcher, &["p1", "missing", "p3"]);

    let output = source
        .read(&ReadConfig::new().with_fail_fast(false))
        .await
        .unwrap();

    assert_eq!(referrers(&output.records), vec!["a0", "a1", "c0"]);
    assert_eq!(output.stats.splits_read, 2);
    assert_eq!(output.stats.splits_failed, 1);
}

#[tokio::test]
async fn test_contract_violation_always_aborts() {
    let broken = EntityValue::new("TrafficReferrer").with("referrer", AttrValue::Integer(1));
    let fetcher = StubFetcher::new().with_page("p1", vec![broken]);
    let (source, _) = source(fetcher, &["p1"]);

    let err = source
        .read(&ReadConfig::new().with_fail_fast(false))
        .await
        .unwrap_err();
    assert!(err.is_contract_violation());
}

#[tokio::test]
async fn test_max_records_caps_output() {
    let fetcher = StubFetcher::new()
        .with_page("p1", page("a", 3))
        .with_page("p2", page("b", 3));
    let (source, _) = source(fetcher, &["p1", "p2"]);

    let output = source
        .read(&ReadConfig::new().with_parallelism(1).with_max_records(4))
        .await
        .unwrap();

    assert_eq!(referrers(&output.records), vec!["a0", "a1", "a2", "b0"]);
    assert_eq!(output.stats.records_read, 4);
}

#[tokio::test]
async fn test_open_reader_manual_protocol() {
    let (source, fetcher) = source(StubFetcher::new().with_page("p1", page("a", 2)), &["p1"]);

    let split = source.plan_splits().unwrap().remove(0);
    let mut reader = source.open_reader(split);
    reader.initialize().await.unwrap();

    let mut count = 0;
    while reader.advance().unwrap() {
        count += 1;
    }
    reader.close();

    assert_eq!(count, 2);
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_read_config_builder() {
    let config = ReadConfig::new()
        .with_parallelism(0)
        .with_fail_fast(false)
        .with_max_records(10);
    assert_eq!(config.parallelism, 1);
    assert!(!config.fail_fast);
    assert_eq!(config.max_records, 10);
    assert_eq!(ReadConfig::default().parallelism, 4);
}
