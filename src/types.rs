//! Base type translation
//!
//! Maps YANG base types to JSON Schema type fragments. Two tables cover the
//! numeric and non-numeric base types; a typedef reference stays shallow
//! (`{"type": "<name>"}`, never inlined); everything else falls back to
//! `{"type": "string"}` so unknown types degrade instead of aborting.

use serde_json::{json, Value};
use tracing::debug;

use crate::node::TypeSpec;

/// Numeric base type translations: `(source, target, format hint)`.
///
/// The format hint mirrors the JSON mapping draft but is not part of the
/// emitted fragment.
const NUMERIC_TYPES: &[(&str, &str, Option<&str>)] = &[
    ("int", "int", None),
    ("int8", "int8", None),
    ("int16", "int16", None),
    ("int32", "int32", Some("int32")),
    ("int64", "int64", Some("int64")),
    ("uint8", "number", None),
    ("uint16", "uint16", None),
    ("uint32", "uint32", Some("uint32")),
    ("uint64", "uint64", Some("uint64")),
];

/// Non-numeric base types with a dedicated translation
const OTHER_TYPES: &[&str] = &[
    "string",
    "enumeration",
    "bits",
    "boolean",
    "empty",
    "union",
    "instance-identifier",
    "leafref",
    "decimal64",
];

/// Base types without a dedicated translation; they take the string fallback
const UNTRANSLATED_BASE_TYPES: &[&str] = &["binary", "identityref"];

/// Whether a type name belongs to the schema language's base type system
pub fn is_base_type(name: &str) -> bool {
    numeric_target(name).is_some()
        || OTHER_TYPES.contains(&name)
        || UNTRANSLATED_BASE_TYPES.contains(&name)
}

/// Translate a type reference into a JSON Schema fragment
pub fn translate(spec: &TypeSpec) -> Value {
    if let Some(target) = numeric_target(&spec.name) {
        return json!({ "type": target });
    }
    if OTHER_TYPES.contains(&spec.name.as_str()) {
        return translate_other(spec);
    }
    if spec.typedef {
        // Shallow by contract: named types are left for the consumer to
        // resolve against the top-level enums collection.
        return json!({ "type": spec.name });
    }
    debug!(name = spec.name.as_str(), "no mapping for type, falling back to string");
    json!({ "type": "string" })
}

fn numeric_target(name: &str) -> Option<&'static str> {
    NUMERIC_TYPES
        .iter()
        .find(|(source, _, _)| *source == name)
        .map(|(_, target, _)| *target)
}

fn translate_other(spec: &TypeSpec) -> Value {
    match spec.name.as_str() {
        "string" | "bits" | "leafref" | "instance-identifier" => json!({ "type": "string" }),
        "boolean" => json!({ "type": "boolean" }),
        // Incomplete against the JSON mapping draft's empty-type encoding;
        // kept until the normative output is pinned down.
        "empty" => json!({ "type": "array", "items": [{ "type": "null" }] }),
        "decimal64" => json!({ "type": "float64" }),
        "enumeration" => json!({ "properties": { "type": { "enum": spec.enums } } }),
        "union" => {
            let members: Vec<Value> = spec.members.iter().map(translate).collect();
            json!({ "oneOf": members })
        }
        _ => json!({ "type": "string" }),
    }
}
