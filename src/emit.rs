//! Schema projection engine
//!
//! Walks a resolved module tree and emits the JSON Schema document. Each of
//! the five projected node kinds has its own projection function; dispatch
//! is a closed match so the skip of an unsupported kind is an explicit
//! branch, not a silent table miss. Containers and lists change shape when
//! their parent is a list: list children accumulate as array items while
//! container children merge into a properties map.

use std::rc::Rc;

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::{EmitError, Result};
use crate::ext;
use crate::names::qualify;
use crate::node::{Node, NodeKind};
use crate::path::find_by_path;
use crate::types;

/// The `$schema` identifier stamped on every document
pub const SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";

/// Caller-facing projection options
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Overrides the emitted title; defaults to the projection root's name
    pub title: Option<String>,
    /// Slash-delimited path selecting an alternate projection root
    pub path: Option<String>,
}

// =============================================================================
// Engine
// =============================================================================

/// Project a resolved module into a complete JSON Schema document
pub fn project(root: &Rc<Node>, options: &EmitOptions) -> Result<Value> {
    let target = match options.path.as_deref() {
        Some(path) => find_by_path(root, path)?,
        None => Rc::clone(root),
    };

    let title = options
        .title
        .clone()
        .unwrap_or_else(|| target.name().to_string());
    let description = format!("Generated from YANG module {}", root.name());
    let properties = produce_schema(&target)?;

    Ok(json!({
        "title": title,
        "$schema": SCHEMA_URI,
        "description": description,
        "type": "object",
        "properties": properties,
    }))
}

/// Project the data-defining children of `root` into a properties map,
/// with the module's typedef enumerations attached under `enums`
pub fn produce_schema(root: &Rc<Node>) -> Result<Map<String, Value>> {
    let enums = extract_enums(root);

    let mut result = Map::new();
    for child in root.children().iter() {
        if !child.kind().is_data_definition() {
            debug!(
                keyword = child.kind().keyword(),
                name = child.name(),
                "not a data definition, skipping"
            );
            continue;
        }
        if let Some(fragment) = produce_node(child)? {
            merge(&mut result, fragment);
        }
    }

    result.insert("enums".to_string(), Value::Object(enums));
    Ok(result)
}

/// Collect typedef enumerations into `name -> [[literal, value], ...]`
fn extract_enums(root: &Node) -> Map<String, Value> {
    let mut enums = Map::new();
    for typedef in root.typedefs() {
        let values: Vec<Value> = typedef
            .values
            .iter()
            .map(|(literal, value)| json!([literal, value]))
            .collect();
        enums.insert(typedef.name.clone(), Value::Array(values));
    }
    enums
}

// =============================================================================
// Dispatch
// =============================================================================

/// Project one node, or `None` for kinds without a projection
fn produce_node(node: &Rc<Node>) -> Result<Option<Map<String, Value>>> {
    let fragment = match node.kind() {
        NodeKind::Container => produce_container(node)?,
        NodeKind::List => produce_list(node)?,
        NodeKind::Leaf => produce_leaf(node)?,
        NodeKind::LeafList => produce_leaf_list(node)?,
        NodeKind::Choice => produce_choice(node)?,
        other => {
            debug!(
                keyword = other.keyword(),
                name = node.name(),
                "no projection for node kind, skipping"
            );
            return Ok(None);
        }
    };
    Ok(Some(fragment))
}

// =============================================================================
// Per-kind projections
// =============================================================================

fn produce_leaf(node: &Rc<Node>) -> Result<Map<String, Value>> {
    let arg = qualify(node);
    let description = node
        .description()
        .ok_or_else(|| missing(node, "description"))?;
    let type_spec = node.type_spec().ok_or_else(|| missing(node, "type"))?;

    // Compound fragments (enumeration, union) carry no top-level "type"
    // member; the flattened leaf form renders those as null.
    let fragment = types::translate(type_spec);
    let type_tag = fragment.get("type").cloned().unwrap_or(Value::Null);

    let mut entry = Map::new();
    entry.insert("type".to_string(), type_tag);
    entry.insert("description".to_string(), json!(description));
    entry.insert("required".to_string(), json!(ext::required(node)));
    entry.insert("nonUpdatable".to_string(), json!(ext::non_updatable(node)));
    Ok(singleton(arg, Value::Object(entry)))
}

fn produce_leaf_list(node: &Rc<Node>) -> Result<Map<String, Value>> {
    let arg = qualify(node);
    let type_spec = node.type_spec().ok_or_else(|| missing(node, "type"))?;

    let entry = if types::is_base_type(&type_spec.name) {
        json!({ "type": "array", "items": types::translate(type_spec) })
    } else {
        debug!(
            name = node.name(),
            item_type = type_spec.name.as_str(),
            "no item type mapping, falling back to string items"
        );
        json!({ "type": "array", "items": [{ "type": "string" }] })
    };
    Ok(singleton(arg, entry))
}

fn produce_container(node: &Rc<Node>) -> Result<Map<String, Value>> {
    let arg = qualify(node);
    let config = match node.config() {
        Some(marker) => json!(marker),
        None => json!(true),
    };
    let description = node.description().unwrap_or_default();
    let enterprise_dependent = ext::enterprise_dependent(node);

    if !parent_is_list(node) {
        let mut properties = Map::new();
        properties.insert("isConfig".to_string(), config);
        properties.insert("isEnterpriseDependent".to_string(), enterprise_dependent);
        properties.insert("description".to_string(), json!(description));
        for child in node.children().iter() {
            if let Some(fragment) = produce_node(child)? {
                merge(&mut properties, fragment);
            }
        }

        let entry = json!({ "type": "object", "properties": properties });
        Ok(singleton(arg, entry))
    } else {
        let mut inner_properties = Map::new();
        for child in node.children().iter() {
            if let Some(fragment) = produce_node(child)? {
                merge(&mut inner_properties, fragment);
            }
        }

        let mut properties = Map::new();
        properties.insert(
            arg,
            json!({
                "type": "object",
                "description": description,
                "properties": inner_properties,
            }),
        );
        properties.insert("isConfig".to_string(), config);
        properties.insert("isEnterpriseDependent".to_string(), enterprise_dependent);

        let mut result = Map::new();
        result.insert("type".to_string(), json!("object"));
        result.insert("properties".to_string(), Value::Object(properties));
        Ok(result)
    }
}

fn produce_list(node: &Rc<Node>) -> Result<Map<String, Value>> {
    let arg = qualify(node);
    let key = ext::list_key(node);
    let ttl_based = ext::ttl_based(node);
    let cluster_key = ext::cluster_key(node);
    let meta_data = ext::meta_data(node);

    let mut items: Vec<Value> = Vec::new();
    for child in node.children().iter() {
        if let Some(fragment) = produce_node(child)? {
            items.push(Value::Object(fragment));
        }
    }

    if !parent_is_list(node) {
        let mut entry = Map::new();
        entry.insert("key".to_string(), json!(key));
        entry.insert("type".to_string(), json!("array"));
        entry.insert("items".to_string(), Value::Array(items));
        entry.insert("isTTLBased".to_string(), ttl_based);
        entry.insert("clusterKey".to_string(), json!(cluster_key));
        entry.insert("metaData".to_string(), json!(meta_data));
        Ok(singleton(arg, Value::Object(entry)))
    } else {
        let mut inner = Map::new();
        inner.insert("type".to_string(), json!("array"));
        inner.insert("items".to_string(), Value::Array(items));
        inner.insert("key".to_string(), json!(key));
        inner.insert("isTTLBased".to_string(), ttl_based);
        inner.insert("clusterKey".to_string(), json!(cluster_key));
        inner.insert("metaData".to_string(), json!(meta_data));

        let mut result = Map::new();
        result.insert("type".to_string(), json!("object"));
        result.insert(
            "properties".to_string(),
            Value::Object(singleton(arg, Value::Object(inner))),
        );
        Ok(result)
    }
}

/// Choices flatten into their parent: every branch member is projected at
/// the choice's own position and the choice contributes no key of its own.
fn produce_choice(node: &Rc<Node>) -> Result<Map<String, Value>> {
    let mut result = Map::new();

    // Explicit case branches (RFC 6020 section 7.9.2, long form).
    for case in node.children().iter() {
        if *case.kind() != NodeKind::Case {
            continue;
        }
        for child in case.children().iter() {
            if let Some(fragment) = produce_node(child)? {
                merge(&mut result, fragment);
            }
        }
    }

    // Case-less short form: data nodes written directly under the choice.
    for child in node.raw_children().iter() {
        let shorthand = matches!(
            child.kind(),
            NodeKind::Container | NodeKind::Leaf | NodeKind::List | NodeKind::LeafList
        );
        if shorthand {
            if let Some(fragment) = produce_node(child)? {
                merge(&mut result, fragment);
            }
        }
    }

    Ok(result)
}

// =============================================================================
// Helpers
// =============================================================================

fn parent_is_list(node: &Node) -> bool {
    node.parent()
        .map_or(false, |parent| *parent.kind() == NodeKind::List)
}

fn missing(node: &Node, field: &str) -> EmitError {
    EmitError::MissingField {
        kind: node.kind().keyword().to_string(),
        name: node.name().to_string(),
        field: field.to_string(),
    }
}

fn singleton(key: String, value: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key, value);
    map
}

/// Key-union merge; later fragments overwrite earlier keys on collision
fn merge(target: &mut Map<String, Value>, fragment: Map<String, Value>) {
    for (key, value) in fragment {
        target.insert(key, value);
    }
}
