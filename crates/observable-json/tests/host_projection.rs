use observable_json::{find, Host};
use serde_json::json;

#[test]
fn host_fields_forward_both_ways() {
    let host = Host::new(json!({"a": 1, "msg": "hi"}));

    // Write through the host, observe on the data document.
    assert!(host.set("a", json!(5)));
    assert_eq!(find(host.data(), "/a").unwrap().view(), json!(5));

    // Write on the data document, observe through the host.
    let root = host.data().as_object().unwrap();
    assert!(root.set("msg", json!("bye")));
    assert_eq!(host.get("msg").unwrap().view(), json!("bye"));
}

#[test]
fn host_field_and_data_entry_share_one_cell() {
    let host = Host::new(json!({"b": {"c": 2}}));

    let through_host = host.get("b").unwrap();
    let through_data = find(host.data(), "/b").unwrap();
    assert!(through_host.same(&through_data));
}

#[test]
fn projection_is_a_construction_snapshot() {
    let host = Host::new(json!({"a": 1}));
    assert_eq!(host.fields(), ["a".to_string()]);
    assert!(host.is_projected("a"));

    // Nothing outside the snapshot is mirrored.
    assert!(!host.is_projected("b"));
    assert!(host.get("b").is_none());
    assert!(!host.set("b", json!(2)));
    assert_eq!(host.view(), json!({"a": 1}));
}

#[test]
fn host_setter_inherits_identity_guard() {
    let host = Host::new(json!({"a": 1, "b": {"c": 2}}));

    assert!(!host.set("a", json!(1)));
    assert_eq!(host.get("a").unwrap().view(), json!(1));

    let b = host.get("b").unwrap();
    assert!(!host.set("b", b.clone()));
    assert!(host.get("b").unwrap().same(&b));
}

#[test]
fn object_assigned_through_host_becomes_reactive() {
    let host = Host::new(json!({"a": 1}));

    assert!(host.set("a", json!({"z": 1})));
    let a = host.get("a").unwrap();
    assert!(a.as_object().unwrap().set("z", json!(9)));
    assert_eq!(host.view(), json!({"a": {"z": 9}}));
}

#[test]
fn empty_and_non_object_data_degrade_quietly() {
    let empty = Host::new(json!({}));
    assert!(empty.fields().is_empty());
    assert_eq!(empty.view(), json!({}));

    let scalar = Host::new(json!(7));
    assert!(scalar.fields().is_empty());
    assert!(scalar.get("anything").is_none());
    assert!(!scalar.set("anything", json!(1)));
    assert_eq!(scalar.view(), json!(7));

    // Arrays project no fields either; the document itself still converts.
    let array = Host::new(json!([1, 2]));
    assert!(array.fields().is_empty());
    assert_eq!(array.view(), json!([1, 2]));
}

#[test]
fn from_json_parses_and_projects() {
    let host = Host::from_json(r#"{"a": 1, "b": {"c": 2}}"#).unwrap();
    assert_eq!(host.fields(), ["a".to_string(), "b".to_string()]);
    assert!(host.set("a", json!(2)));
    assert_eq!(host.view(), json!({"a": 2, "b": {"c": 2}}));
}

#[test]
fn from_json_rejects_invalid_documents() {
    let err = Host::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid data document:"));
}

#[test]
fn field_order_follows_the_document() {
    let host = Host::new(json!({"z": 1, "a": 2, "m": 3}));
    assert_eq!(
        host.fields(),
        ["z".to_string(), "a".to_string(), "m".to_string()]
    );
}
