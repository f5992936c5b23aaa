//! YANG → JSON Schema projection
//!
//! Projects an already-resolved, already-validated YANG module tree into a
//! JSON Schema (draft-04 envelope) document. Parsing schema text and
//! resolving references are external collaborators; this crate consumes
//! their output as a resolved-module JSON document (or a tree built through
//! [`NodeBuilder`]) and owns only the projection.
//!
//! ## Features
//!
//! - **Per-kind projection**: containers, lists, leaves, leaf-lists and
//!   choices each have their own output shape; unsupported kinds are skipped
//!   with a diagnostic instead of failing
//! - **Context-sensitive shapes**: containers and lists emit a different
//!   form when their parent is a list
//! - **Namespace qualification**: member names are module-qualified at the
//!   document top level and across module boundaries only
//! - **Graceful type fallback**: unmapped base types degrade to
//!   `{"type": "string"}` rather than aborting
//! - **Typedef enumerations**: module typedefs surface as a top-level
//!   `enums` collection
//!
//! ## Pipeline
//!
//! ```text
//! resolved module document ──loader──▶ Node tree ──emit──▶ JSON Schema
//!                                        │
//!                                        └─path──▶ alternate projection root
//! ```

pub mod emit;
pub mod error;
pub mod ext;
pub mod loader;
pub mod names;
pub mod node;
pub mod path;
pub mod types;

pub use emit::{produce_schema, project, EmitOptions, SCHEMA_URI};
pub use error::{EmitError, Result};
pub use loader::{load_module, ModuleDoc};
pub use node::{Node, NodeBuilder, NodeKind, TypeSpec, Typedef};
pub use path::find_by_path;
