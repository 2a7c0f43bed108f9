#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use serde_json::json;
use std::fs;

#[test]
fn test_insertion_order_is_preserved() {
    let props: Properties = [("zeta", "1"), ("alpha", "2"), ("mid", "3")]
        .into_iter()
        .collect();
    let keys: Vec<_> = props.keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_replaced_key_keeps_position() {
    let mut props = Properties::new();
    props.insert("a", "1");
    props.insert("b", "2");
    props.insert("a", "3");
    let entries: Vec<_> = props.iter().collect();
    assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    assert_eq!(props.len(), 2);
}

#[test]
fn test_flatten_scalars_and_tables() {
    let value = json!({
        "builder": true,
        "builder.toBuilder": "true",
        "toString": {
            "exclude": ["password", "salt"],
            "callSuper": false
        },
        "retries": 3
    });
    let props = properties_from_value(&value).unwrap();
    assert_eq!(props.get("builder"), Some("true"));
    assert_eq!(props.get("builder.toBuilder"), Some("true"));
    assert_eq!(props.get("toString.exclude"), Some("password,salt"));
    assert_eq!(props.get("toString.callSuper"), Some("false"));
    assert_eq!(props.get("retries"), Some("3"));
}

#[test]
fn test_flatten_rejects_non_table() {
    assert!(properties_from_value(&json!(["builder"])).is_err());
    assert!(properties_from_value(&json!("builder")).is_err());
}

#[test]
fn test_flatten_rejects_null_and_nested_arrays() {
    assert!(properties_from_value(&json!({ "builder": null })).is_err());
    assert!(properties_from_value(&json!({ "toString.exclude": [["a"]] })).is_err());
}

#[test]
fn test_load_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugin.toml");
    fs::write(
        &path,
        r#"
builder = true
"builder.toBuilder" = true
accessors = "TRUE"
"accessors.prefix" = "get"
"#,
    )
    .unwrap();

    let props = load_properties(&path).unwrap();
    let entries: Vec<_> = props.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("builder", "true"),
            ("builder.toBuilder", "true"),
            ("accessors", "TRUE"),
            ("accessors.prefix", "get"),
        ]
    );
}

#[test]
fn test_load_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugin.yml");
    fs::write(
        &path,
        "allArgsConstructor: \"true\"\ntoString:\n  exclude: [a, b]\n",
    )
    .unwrap();

    let props = load_properties(&path).unwrap();
    assert_eq!(props.get("allArgsConstructor"), Some("true"));
    assert_eq!(props.get("toString.exclude"), Some("a,b"));
}

#[test]
fn test_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugin.json");
    fs::write(&path, r#"{"builder": "true", "builder.builderMethodName": "of"}"#).unwrap();

    let props = load_properties(&path).unwrap();
    assert_eq!(props.get("builder.builderMethodName"), Some("of"));
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = load_properties(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn test_load_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "builder = ").unwrap();
    assert!(load_properties(&path).is_err());
}
