//! Resolved schema tree model
//!
//! The tree consumed by the projection engine. It mirrors what a YANG
//! parser/resolver hands over after typedef expansion and validation:
//! every node knows its owning module, its nearest top-level module, its
//! resolved children and its literal substatements. The engine treats the
//! tree as read-only; [`NodeBuilder`] is the only way trees are made, and it
//! wires the parent back-references in a single pass.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

// =============================================================================
// Node Kind
// =============================================================================

/// Kind of a schema node
///
/// The engine projects exactly five kinds. `Case` exists so the choice
/// projection can flatten explicit branches, `Module` marks the tree root,
/// and every keyword the engine does not model lands in `Other` with its
/// literal keyword kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    List,
    Leaf,
    LeafList,
    Choice,
    Case,
    Module,
    Other(String),
}

impl NodeKind {
    /// Parse a statement keyword into a kind
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "container" => NodeKind::Container,
            "list" => NodeKind::List,
            "leaf" => NodeKind::Leaf,
            "leaf-list" => NodeKind::LeafList,
            "choice" => NodeKind::Choice,
            "case" => NodeKind::Case,
            "module" => NodeKind::Module,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// The statement keyword this kind corresponds to
    pub fn keyword(&self) -> &str {
        match self {
            NodeKind::Container => "container",
            NodeKind::List => "list",
            NodeKind::Leaf => "leaf",
            NodeKind::LeafList => "leaf-list",
            NodeKind::Choice => "choice",
            NodeKind::Case => "case",
            NodeKind::Module => "module",
            NodeKind::Other(keyword) => keyword,
        }
    }

    /// Whether this kind defines a data node in the resolved tree
    pub fn is_data_definition(&self) -> bool {
        matches!(
            self,
            NodeKind::Container
                | NodeKind::List
                | NodeKind::Leaf
                | NodeKind::LeafList
                | NodeKind::Choice
                | NodeKind::Case
        )
    }
}

// =============================================================================
// Type Reference
// =============================================================================

/// A node's resolved `type` substatement
#[derive(Debug, Clone, Default)]
pub struct TypeSpec {
    /// Type name as written (base type name or typedef name)
    pub name: String,
    /// Declared enumeration literals, in declaration order
    pub enums: Vec<String>,
    /// Union member types, in declaration order
    pub members: Vec<TypeSpec>,
    /// Set when the name resolves to a user-defined typedef
    pub typedef: bool,
}

impl TypeSpec {
    /// A plain named type (base type or unresolvable name)
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// An `enumeration` type with its declared literals
    pub fn enumeration(literals: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: "enumeration".to_string(),
            enums: literals.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// A `union` type over the given member types
    pub fn union(members: Vec<TypeSpec>) -> Self {
        Self {
            name: "union".to_string(),
            members,
            ..Default::default()
        }
    }

    /// A reference to a user-defined typedef
    pub fn typedef_ref(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            typedef: true,
            ..Default::default()
        }
    }
}

/// A module-scope typedef with its declared enumeration values
#[derive(Debug, Clone)]
pub struct Typedef {
    /// Typedef name
    pub name: String,
    /// `(literal, numeric value)` pairs, in declaration order
    pub values: Vec<(String, i64)>,
}

impl Typedef {
    pub fn new(name: impl Into<String>, values: Vec<(String, i64)>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A vendor annotation attached to a node
///
/// `namespace` is `None` for plain (un-prefixed) substatements such as a
/// list's `key`, and the extension module name for vendor-defined ones.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub namespace: Option<String>,
    pub name: String,
    pub value: String,
}

// =============================================================================
// Node
// =============================================================================

/// One node of the resolved schema tree
///
/// Immutable after [`NodeBuilder::build`]; the parent link is weak so the
/// tree owns its nodes top-down only.
#[derive(Debug)]
pub struct Node {
    kind: NodeKind,
    name: String,
    module: String,
    top_module: String,
    description: Option<String>,
    config: Option<String>,
    type_spec: Option<TypeSpec>,
    typedefs: Vec<Typedef>,
    annotations: Vec<Annotation>,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<Rc<Node>>>,
    raw_children: RefCell<Vec<Rc<Node>>>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the module that defines this node's namespace
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Name of the nearest enclosing top-level module
    pub fn top_module(&self) -> &str {
        &self.top_module
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Literal value of the node's config marker, if one is present
    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn type_spec(&self) -> Option<&TypeSpec> {
        self.type_spec.as_ref()
    }

    /// Module-scope typedefs; empty below module scope
    pub fn typedefs(&self) -> &[Typedef] {
        &self.typedefs
    }

    /// The enclosing node; `None` only for the tree root
    pub fn parent(&self) -> Option<Rc<Node>> {
        self.parent.borrow().upgrade()
    }

    /// Resolved children, in declaration order
    pub fn children(&self) -> Ref<'_, Vec<Rc<Node>>> {
        self.children.borrow()
    }

    /// Literal substatements, in declaration order
    pub fn raw_children(&self) -> Ref<'_, Vec<Rc<Node>>> {
        self.raw_children.borrow()
    }

    /// Look up an annotation value by `(namespace, name)`
    pub fn annotation(&self, namespace: Option<&str>, name: &str) -> Option<&str> {
        self.annotations
            .iter()
            .find(|a| a.namespace.as_deref() == namespace && a.name == name)
            .map(|a| a.value.as_str())
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Fluent constructor for resolved trees
///
/// Both the document loader and test fixtures build trees through this;
/// `build()` assigns owning/top module names down the tree and wires the
/// weak parent links.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    kind: NodeKind,
    name: String,
    module: Option<String>,
    description: Option<String>,
    config: Option<String>,
    type_spec: Option<TypeSpec>,
    typedefs: Vec<Typedef>,
    annotations: Vec<Annotation>,
    children: Vec<NodeBuilder>,
}

impl NodeBuilder {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            module: None,
            description: None,
            config: None,
            type_spec: None,
            typedefs: Vec::new(),
            annotations: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Module, name)
    }

    pub fn container(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Container, name)
    }

    pub fn list(name: impl Into<String>) -> Self {
        Self::new(NodeKind::List, name)
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Leaf, name)
    }

    pub fn leaf_list(name: impl Into<String>) -> Self {
        Self::new(NodeKind::LeafList, name)
    }

    pub fn choice(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Choice, name)
    }

    pub fn case(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Case, name)
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn config(mut self, value: impl Into<String>) -> Self {
        self.config = Some(value.into());
        self
    }

    pub fn typ(mut self, spec: TypeSpec) -> Self {
        self.type_spec = Some(spec);
        self
    }

    pub fn typedef(mut self, typedef: Typedef) -> Self {
        self.typedefs.push(typedef);
        self
    }

    pub fn annotation(
        mut self,
        namespace: Option<&str>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.annotations.push(Annotation {
            namespace: namespace.map(str::to_string),
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Mark this subtree as originating from another module (augmented in)
    pub fn from_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn child(mut self, child: NodeBuilder) -> Self {
        self.children.push(child);
        self
    }

    /// Materialize the tree, wiring module names and parent links
    pub fn build(self) -> Rc<Node> {
        let module = self.module.clone().unwrap_or_else(|| self.name.clone());
        self.build_node(&module, &module, None)
    }

    fn build_node(self, module: &str, top: &str, parent: Option<&Rc<Node>>) -> Rc<Node> {
        // A module override starts a new namespace for the whole subtree.
        let (module, top) = match &self.module {
            Some(own) => (own.clone(), own.clone()),
            None => (module.to_string(), top.to_string()),
        };

        let node = Rc::new(Node {
            kind: self.kind,
            name: self.name,
            module: module.clone(),
            top_module: top.clone(),
            description: self.description,
            config: self.config,
            type_spec: self.type_spec,
            typedefs: self.typedefs,
            annotations: self.annotations,
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            raw_children: RefCell::new(Vec::new()),
        });

        if let Some(parent) = parent {
            *node.parent.borrow_mut() = Rc::downgrade(parent);
        }

        for child in self.children {
            let built = child.build_node(&module, &top, Some(&node));
            node.children.borrow_mut().push(Rc::clone(&built));
            node.raw_children.borrow_mut().push(built);
        }

        node
    }
}
