use super::*;
use crate::error::Error;
use crate::model::sample::sample_value;
use crate::model::{AttrValue, EntityKind, EntityValue};
use crate::schema::{build_schema, FieldType, Schema, SchemaField};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn assert_no_nulls(record: &Record) {
    for (name, value) in record.iter() {
        match value {
            FieldValue::Null => panic!("field {}.{} is null", record.name(), name),
            FieldValue::Record(nested) => assert_no_nulls(nested),
            FieldValue::Array(items) => items.iter().for_each(|item| {
                if let FieldValue::Record(nested) = item {
                    assert_no_nulls(nested);
                }
            }),
            _ => {}
        }
    }
}

#[test_case(EntityKind::Branch)]
#[test_case(EntityKind::Collaborator)]
#[test_case(EntityKind::Comment)]
#[test_case(EntityKind::Commit)]
#[test_case(EntityKind::Content)]
#[test_case(EntityKind::DeployKey)]
#[test_case(EntityKind::Deployment)]
#[test_case(EntityKind::Fork)]
#[test_case(EntityKind::Invitation)]
#[test_case(EntityKind::Page)]
#[test_case(EntityKind::Release)]
#[test_case(EntityKind::TrafficReferrer)]
#[test_case(EntityKind::Webhook)]
fn test_populated_entity_fills_every_field(kind: EntityKind) {
    let schema = build_schema(kind.label(), kind).unwrap();
    let instance = sample_value(kind.shape());

    let record = transform(&instance, &schema).unwrap();

    assert_eq!(
        record.field_names().collect::<Vec<_>>(),
        schema.field_names().collect::<Vec<_>>()
    );
    assert_no_nulls(&record);
}

#[test]
fn test_absent_values() {
    let schema = build_schema("Releases", EntityKind::Release).unwrap();
    let mut instance = sample_value(EntityKind::Release.shape());
    instance.insert("name", AttrValue::Null);
    instance.insert("author", AttrValue::Null);
    instance.insert("assets", AttrValue::Null);

    let record = transform(&instance, &schema).unwrap();

    assert!(record.get("name").unwrap().is_null());
    assert!(record.get("author").unwrap().is_null());
    assert_eq!(record.get("assets").unwrap().as_array(), Some(&[][..]));
    assert_eq!(record.len(), schema.len());
}

#[test]
fn test_array_order_preserved() {
    let schema = build_schema("Webhooks", EntityKind::Webhook).unwrap();
    let mut instance = sample_value(EntityKind::Webhook.shape());
    instance.insert(
        "events",
        AttrValue::List(vec![
            AttrValue::String("push".into()),
            AttrValue::String("pull_request".into()),
            AttrValue::String("issues".into()),
        ]),
    );

    let record = transform(&instance, &schema).unwrap();
    let events: Vec<_> = record
        .get("events")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(FieldValue::as_str)
        .collect();
    assert_eq!(events, vec!["push", "pull_request", "issues"]);
}

#[test]
fn test_nested_records() {
    let schema = build_schema("Commits", EntityKind::Commit).unwrap();
    let record = transform(&sample_value(EntityKind::Commit.shape()), &schema).unwrap();

    let author = record.get("mainAuthor").unwrap().as_record().unwrap();
    assert_eq!(author.name(), "User");
    assert_eq!(author.get("login").unwrap().as_str(), Some("login-value"));
    assert_eq!(author.get("id").unwrap().as_i64(), Some(7));

    let parents = record.get("parents").unwrap().as_array().unwrap();
    assert_eq!(parents.len(), 1);
    assert_eq!(
        parents[0].as_record().unwrap().get("sha").unwrap().as_str(),
        Some("sha-value")
    );
}

#[test]
fn test_missing_attribute_is_shape_mismatch() {
    let schema = build_schema("Traffic:Referrers", EntityKind::TrafficReferrer).unwrap();
    let instance = EntityValue::new("TrafficReferrer")
        .with("referrer", AttrValue::String("google.com".into()))
        .with("count", AttrValue::Integer(3));

    let err = transform(&instance, &schema).unwrap_err();
    assert!(
        matches!(err, Error::ShapeMismatch { ref field, .. } if field == "uniques"),
        "unexpected error {err}"
    );
    assert!(err.is_contract_violation());
}

#[test]
fn test_wrong_value_kind_is_shape_mismatch() {
    let schema = Schema::new("Probe", vec![SchemaField::nullable("count", FieldType::Long)]);
    let instance = EntityValue::new("Probe").with("count", AttrValue::String("3".into()));

    let err = transform(&instance, &schema).unwrap_err();
    assert!(err.to_string().contains("expected long, found string"));
}

#[test]
fn test_serializes_in_schema_order() {
    let schema = build_schema("Traffic:Referrers", EntityKind::TrafficReferrer).unwrap();
    let instance = EntityValue::new("TrafficReferrer")
        .with("referrer", AttrValue::String("google.com".into()))
        .with("count", AttrValue::Integer(12))
        .with("uniques", AttrValue::Null);

    let record = transform(&instance, &schema).unwrap();
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"referrer":"google.com","count":12,"uniques":null}"#
    );
    assert_eq!(
        record.to_json().unwrap(),
        json!({ "referrer": "google.com", "count": 12, "uniques": null })
    );
}

#[test]
fn test_json_value_keeps_schema_order() {
    let schema = build_schema("Traffic:Referrers", EntityKind::TrafficReferrer).unwrap();
    let instance = EntityValue::new("TrafficReferrer")
        .with("referrer", AttrValue::String("google.com".into()))
        .with("count", AttrValue::Integer(12))
        .with("uniques", AttrValue::Integer(1));

    let record = transform(&instance, &schema).unwrap();
    let value = record.to_json().unwrap();

    assert_eq!(
        value.as_object().unwrap().keys().collect::<Vec<_>>(),
        vec!["referrer", "count", "uniques"]
    );
    assert_eq!(
        value.to_string(),
        r#"{"referrer":"google.com","count":12,"uniques":1}"#
    );
    assert_eq!(
        json!({ "data": record }).to_string(),
        r#"{"data":{"referrer":"google.com","count":12,"uniques":1}}"#
    );
}

#[test]
fn test_transform_all_keeps_order() {
    let schema = build_schema("Traffic:Referrers", EntityKind::TrafficReferrer).unwrap();
    let instances: Vec<_> = ["a.com", "b.com", "c.com"]
        .iter()
        .map(|r| {
            EntityValue::new("TrafficReferrer")
                .with("referrer", AttrValue::String((*r).into()))
                .with("count", AttrValue::Integer(1))
                .with("uniques", AttrValue::Integer(1))
        })
        .collect();

    let records = transform_all(&instances, &schema).unwrap();
    let referrers: Vec<_> = records
        .iter()
        .map(|r| r.get("referrer").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(referrers, vec!["a.com", "b.com", "c.com"]);
}
