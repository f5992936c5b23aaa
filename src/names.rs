//! Member name qualification
//!
//! A namespace-qualified member name is used for all members of a top-level
//! JSON object, and whenever the namespaces of a data node and its parent
//! differ. In all other cases the simple form of the member name is used.

use tracing::debug;

use crate::node::Node;

/// Compute the output key for a node
pub fn qualify(node: &Node) -> String {
    let Some(parent) = node.parent() else {
        // The tree root is never emitted as a member; keep its bare name.
        return node.name().to_string();
    };

    if parent.parent().is_none() {
        debug!(name = node.name(), "qualifying top-level member");
        return format!("{}:{}", node.module(), node.name());
    }

    if node.top_module() != parent.top_module() {
        debug!(name = node.name(), "qualifying member across module boundary");
        return format!("{}:{}", node.top_module(), node.name());
    }

    node.name().to_string()
}
