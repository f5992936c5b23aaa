//! Resolved-module document loader
//!
//! The schema-text parser and reference resolver are external collaborators;
//! their interface is a JSON document describing one resolved module. This
//! module deserializes that document and materializes the [`Node`] tree the
//! projection engine consumes.
//!
//! ```json
//! {
//!   "module": "example-system",
//!   "typedefs": [{ "name": "severity", "enums": [["minor", 0], ["major", 1]] }],
//!   "nodes": [
//!     { "kind": "container", "name": "system", "description": "…",
//!       "children": [{ "kind": "leaf", "name": "hostname",
//!                      "type": { "name": "string" },
//!                      "description": "…" }] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::Result;
use crate::node::{Node, NodeBuilder, NodeKind, TypeSpec, Typedef};

/// One resolved module, as handed over by the external resolver
#[derive(Debug, Deserialize)]
pub struct ModuleDoc {
    /// Module name; becomes the tree root and the default namespace
    pub module: String,
    /// Module-scope typedefs with their enumeration values
    #[serde(default)]
    pub typedefs: Vec<TypedefDoc>,
    /// Top-level data nodes
    #[serde(default)]
    pub nodes: Vec<NodeDoc>,
}

#[derive(Debug, Deserialize)]
pub struct TypedefDoc {
    pub name: String,
    #[serde(default)]
    pub enums: Vec<(String, i64)>,
}

/// One node of the resolved tree
#[derive(Debug, Deserialize)]
pub struct NodeDoc {
    /// Statement keyword; unknown keywords load fine and are skipped at
    /// projection time
    pub kind: String,
    pub name: String,
    /// Owning module override for augmented-in subtrees
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Literal config marker value, when present
    #[serde(default)]
    pub config: Option<String>,
    #[serde(rename = "type", default)]
    pub type_spec: Option<TypeDoc>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDoc>,
    #[serde(default)]
    pub children: Vec<NodeDoc>,
}

#[derive(Debug, Deserialize)]
pub struct TypeDoc {
    pub name: String,
    #[serde(default)]
    pub enums: Vec<String>,
    #[serde(default)]
    pub members: Vec<TypeDoc>,
    /// Set by the resolver when the name refers to a user-defined typedef
    #[serde(default)]
    pub typedef: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnnotationDoc {
    #[serde(default)]
    pub ns: Option<String>,
    pub name: String,
    pub value: String,
}

/// Read and materialize a resolved-module document
pub fn load_module(path: &Path) -> Result<Rc<Node>> {
    let text = fs::read_to_string(path)?;
    let doc: ModuleDoc = serde_json::from_str(&text)?;
    Ok(doc.into_tree())
}

impl ModuleDoc {
    /// Build the node tree for this document
    pub fn into_tree(self) -> Rc<Node> {
        let mut builder = NodeBuilder::module(self.module);
        for typedef in self.typedefs {
            builder = builder.typedef(Typedef::new(typedef.name, typedef.enums));
        }
        for node in self.nodes {
            builder = builder.child(node.into_builder());
        }
        builder.build()
    }
}

impl NodeDoc {
    fn into_builder(self) -> NodeBuilder {
        let mut builder = NodeBuilder::new(NodeKind::from_keyword(&self.kind), self.name);
        if let Some(module) = self.module {
            builder = builder.from_module(module);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        if let Some(config) = self.config {
            builder = builder.config(config);
        }
        if let Some(type_spec) = self.type_spec {
            builder = builder.typ(type_spec.into_spec());
        }
        for annotation in self.annotations {
            builder = builder.annotation(annotation.ns.as_deref(), annotation.name, annotation.value);
        }
        for child in self.children {
            builder = builder.child(child.into_builder());
        }
        builder
    }
}

impl TypeDoc {
    fn into_spec(self) -> TypeSpec {
        TypeSpec {
            name: self.name,
            enums: self.enums,
            members: self.members.into_iter().map(TypeDoc::into_spec).collect(),
            typedef: self.typedef,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "module": "m",
        "typedefs": [{ "name": "severity", "enums": [["minor", 0], ["major", 1]] }],
        "nodes": [
            {
                "kind": "container",
                "name": "system",
                "description": "system settings",
                "children": [
                    { "kind": "leaf", "name": "hostname",
                      "type": { "name": "string" },
                      "description": "host name" },
                    { "kind": "leaf", "name": "vendor",
                      "module": "aug",
                      "type": { "name": "string" },
                      "description": "vendor name" },
                    { "kind": "rpc", "name": "reboot" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_document_builds_wired_tree() {
        let doc: ModuleDoc = serde_json::from_str(DOC).unwrap();
        let root = doc.into_tree();

        assert_eq!(*root.kind(), NodeKind::Module);
        assert_eq!(root.typedefs().len(), 1);
        assert_eq!(root.typedefs()[0].values[1], ("major".to_string(), 1));

        let system = Rc::clone(&root.children()[0]);
        assert_eq!(*system.kind(), NodeKind::Container);
        assert_eq!(system.parent().unwrap().name(), "m");

        let hostname = Rc::clone(&system.children()[0]);
        assert_eq!(hostname.module(), "m");
        assert_eq!(system.children()[1].module(), "aug");
        assert_eq!(
            *system.children()[2].kind(),
            NodeKind::Other("rpc".to_string())
        );
    }

    #[test]
    fn test_unknown_kind_loads_without_error() {
        let doc: ModuleDoc =
            serde_json::from_str(r#"{ "module": "m", "nodes": [{ "kind": "notification", "name": "n" }] }"#)
                .unwrap();
        let root = doc.into_tree();
        assert_eq!(
            *root.children()[0].kind(),
            NodeKind::Other("notification".to_string())
        );
    }

    #[test]
    fn test_load_module_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        fs::write(&path, DOC).unwrap();

        let root = load_module(&path).unwrap();
        assert_eq!(root.name(), "m");
        assert_eq!(root.children().len(), 1);
    }
}
