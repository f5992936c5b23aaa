//! End-to-end projection tests over a resolved-module fixture

use std::rc::Rc;

use serde_json::{json, Value};
use yang_jsonschema::{
    load_module, project, EmitError, EmitOptions, ModuleDoc, Node, SCHEMA_URI,
};

fn fixture_tree() -> Rc<Node> {
    let doc: ModuleDoc =
        serde_json::from_str(include_str!("fixtures/example-system.json")).unwrap();
    doc.into_tree()
}

#[test]
fn test_envelope_fields() {
    let root = fixture_tree();
    let document = project(&root, &EmitOptions::default()).unwrap();

    assert_eq!(document["title"], json!("example-system"));
    assert_eq!(document["$schema"], json!(SCHEMA_URI));
    assert_eq!(
        document["description"],
        json!("Generated from YANG module example-system")
    );
    assert_eq!(document["type"], json!("object"));
    assert!(document["properties"].is_object());
}

#[test]
fn test_container_projection_with_choice_flattening() {
    let root = fixture_tree();
    let document = project(&root, &EmitOptions::default()).unwrap();
    let system = &document["properties"]["example-system:system"];

    assert_eq!(system["type"], json!("object"));
    let properties = system["properties"].as_object().unwrap();
    assert_eq!(properties["isConfig"], json!("true"));
    assert_eq!(properties["isEnterpriseDependent"], json!("true"));
    assert_eq!(properties["description"], json!("System group configuration"));

    // Nested members keep their simple names.
    assert_eq!(properties["hostname"]["type"], json!("string"));
    assert_eq!(
        properties["ntp-server"],
        json!({ "type": "array", "items": { "type": "string" } })
    );

    // Both choice branches land at the choice's position; no choice or case
    // key appears.
    assert_eq!(properties["buffer-size"]["type"], json!("uint32"));
    assert_eq!(properties["collector"]["type"], json!("string"));
    assert!(!properties.contains_key("logging"));
    assert!(!properties.contains_key("local"));
}

#[test]
fn test_list_projection() {
    let root = fixture_tree();
    let document = project(&root, &EmitOptions::default()).unwrap();
    let interface = &document["properties"]["example-system:interface"];

    assert_eq!(interface["key"], json!("name"));
    assert_eq!(interface["type"], json!("array"));
    assert_eq!(interface["isTTLBased"], json!("true"));
    assert_eq!(interface["clusterKey"], json!("name"));
    assert_eq!(interface["metaData"], json!("none"));

    let items = interface["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);

    // Items accumulate one fragment per child, in declaration order.
    assert_eq!(items[0]["name"]["type"], json!("string"));
    assert_eq!(items[1]["mtu"]["type"], json!("uint16"));

    // Typedef-typed leaf stays shallow.
    assert_eq!(items[2]["severity"]["type"], json!("severity"));

    // A container under a list takes the list-item shape.
    let ethernet_item = &items[3];
    assert_eq!(ethernet_item["type"], json!("object"));
    assert_eq!(ethernet_item["properties"]["isConfig"], json!(true));
    assert_eq!(
        ethernet_item["properties"]["ethernet"]["description"],
        json!("Ethernet settings")
    );
    // The enumeration-typed leaf flattens to a null type tag.
    assert_eq!(
        ethernet_item["properties"]["ethernet"]["properties"]["duplex"]["type"],
        Value::Null
    );
}

#[test]
fn test_typedef_enums_are_collected() {
    let root = fixture_tree();
    let document = project(&root, &EmitOptions::default()).unwrap();

    assert_eq!(
        document["properties"]["enums"],
        json!({ "severity": [["minor", 0], ["major", 1], ["critical", 2]] })
    );
}

#[test]
fn test_subtree_path_re_roots_projection() {
    let root = fixture_tree();
    let options = EmitOptions {
        title: None,
        path: Some("/system".to_string()),
    };
    let document = project(&root, &options).unwrap();

    // Title defaults to the new root's name; the description still names the
    // originating module.
    assert_eq!(document["title"], json!("system"));
    assert_eq!(
        document["description"],
        json!("Generated from YANG module example-system")
    );
    assert!(document["properties"]["hostname"].is_object());
    assert!(document["properties"]
        .as_object()
        .unwrap()
        .keys()
        .all(|key| !key.starts_with("example-system:")));
}

#[test]
fn test_missing_path_fails_projection() {
    let root = fixture_tree();
    let options = EmitOptions {
        title: Some("ignored".to_string()),
        path: Some("/system/no-such-node".to_string()),
    };
    match project(&root, &options) {
        Err(EmitError::PathNotFound(path)) => assert_eq!(path, "/system/no-such-node"),
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

#[test]
fn test_projection_is_deterministic() {
    let root = fixture_tree();
    let first = project(&root, &EmitOptions::default()).unwrap();
    let second = project(&root, &EmitOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_load_module_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example-system.json");
    std::fs::write(&path, include_str!("fixtures/example-system.json")).unwrap();

    let root = load_module(&path).unwrap();
    let document = project(&root, &EmitOptions::default()).unwrap();
    assert_eq!(document["title"], json!("example-system"));

    // The loaded tree projects identically to the in-memory one.
    let reference = project(&fixture_tree(), &EmitOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&document).unwrap(),
        serde_json::to_string(&reference).unwrap()
    );
}
