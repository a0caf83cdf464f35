mod common;

use std::fs;

use common::{constant_variable, map_args, query_variable};
use tempfile::TempDir;
use vareditor::variable::{StoreError, VariableLookup, VariableStore, VariableUpdater};

#[test]
fn load_from_reads_variable_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("variables.json");
    fs::write(
        &path,
        r#"[
            {
                "id": "v1",
                "name": "hosts",
                "selected": ["a"],
                "orgID": "org-1",
                "arguments": {"type": "constant", "values": ["a", "b"]}
            },
            {
                "id": "v2",
                "name": "region",
                "arguments": {"type": "map", "values": {"us": "us-east-1"}}
            }
        ]"#,
    )
    .unwrap();

    let store = VariableStore::load_from(&path).unwrap();
    assert!(!store.is_empty());
    assert_eq!(store.len(), 2);

    let v1 = store.find_variable("v1").unwrap();
    assert_eq!(v1.arguments, constant_variable().arguments);
    assert_eq!(v1.extra["orgID"], "org-1");

    let v2 = store.find_variable("v2").unwrap();
    assert_eq!(v2.selected, None);
    assert_eq!(v2.arguments, map_args(&[("us", "us-east-1")]));
}

#[test]
fn load_from_accepts_empty_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("variables.json");
    fs::write(&path, "[]").unwrap();

    let store = VariableStore::load_from(&path).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.find_variable("v1"), None);
}

#[test]
fn load_from_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("variables.json");
    fs::write(&path, r#"[{"id": "v1", "name": "x", "arguments": {"type": "csv"}}]"#).unwrap();

    assert!(matches!(
        VariableStore::load_from(&path),
        Err(StoreError::ParseError { .. })
    ));
}

#[test]
fn load_from_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        VariableStore::load_from(&dir.path().join("none.json")),
        Err(StoreError::ReadError { .. })
    ));
}

#[test]
fn update_replaces_matching_record_only() {
    let store = VariableStore::new(vec![constant_variable(), query_variable()]).unwrap();

    let mut edited = constant_variable();
    edited.arguments = map_args(&[("x", "1")]);
    store.update_variable("v1", edited.clone());

    assert_eq!(store.find_variable("v1"), Some(edited));
    assert_eq!(store.find_variable("q1"), Some(query_variable()));
}

#[test]
fn update_for_unknown_id_is_ignored() {
    let store = VariableStore::new(vec![constant_variable()]).unwrap();
    store.update_variable("missing", query_variable());
    assert_eq!(store.list(), vec![constant_variable()]);
}
