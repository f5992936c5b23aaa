//! Vendor annotation lookup
//!
//! The recognized annotation set is fixed: one un-namespaced list `key` plus
//! six annotations from the `ne-types` extension module. Every accessor
//! returns the annotation's literal value when present and a documented
//! default when absent; absence is never an error.

use serde_json::Value;
use tracing::warn;

use crate::node::Node;

/// Namespace of the vendor extension module
pub const VENDOR_NS: &str = "ne-types";

/// A list's `key` statement; defaults to the empty string.
///
/// A keyless list is schema-suspect but not fatal, so it is only reported.
pub fn list_key(node: &Node) -> String {
    match node.annotation(None, "key") {
        Some(value) => value.to_string(),
        None => {
            warn!(list = node.name(), "potentially invalid list with no key element");
            String::new()
        }
    }
}

/// `ne-types:ttlBased` on a list; defaults to `false`.
pub fn ttl_based(node: &Node) -> Value {
    flag(node, "ttlBased")
}

/// `ne-types:metaData` on a list; defaults to `"none"`.
pub fn meta_data(node: &Node) -> String {
    tagged(node, "metaData")
}

/// `ne-types:clusterKey` on a list; defaults to `"none"`.
pub fn cluster_key(node: &Node) -> String {
    tagged(node, "clusterKey")
}

/// `ne-types:enterpriseDependent` on a container; defaults to `false`.
pub fn enterprise_dependent(node: &Node) -> Value {
    flag(node, "enterpriseDependent")
}

/// `ne-types:required` on a leaf; defaults to `"false"`.
pub fn required(node: &Node) -> String {
    node.annotation(Some(VENDOR_NS), "required")
        .unwrap_or("false")
        .to_string()
}

/// `ne-types:nonUpdatable` on a leaf; defaults to `"false"`.
pub fn non_updatable(node: &Node) -> String {
    node.annotation(Some(VENDOR_NS), "nonUpdatable")
        .unwrap_or("false")
        .to_string()
}

// Boolean-defaulted annotations keep their literal string value when set,
// so a marker written as "true" survives as written.
fn flag(node: &Node, name: &str) -> Value {
    match node.annotation(Some(VENDOR_NS), name) {
        Some(value) => Value::String(value.to_string()),
        None => Value::Bool(false),
    }
}

fn tagged(node: &Node, name: &str) -> String {
    node.annotation(Some(VENDOR_NS), name)
        .unwrap_or("none")
        .to_string()
}
