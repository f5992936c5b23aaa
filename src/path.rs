//! Subtree selection by slash-delimited path
//!
//! Descends a resolved tree through data-defining children by name, so a
//! projection can be re-rooted below the module.

use std::rc::Rc;

use tracing::debug;

use crate::error::{EmitError, Result};
use crate::node::Node;

/// Find the node a slash-delimited path points at
///
/// A leading empty segment (from a leading `/`) is discarded; an empty path
/// returns the root unchanged. Fails with [`EmitError::PathNotFound`] when a
/// segment matches no data-defining child at the current level.
pub fn find_by_path(root: &Rc<Node>, path: &str) -> Result<Rc<Node>> {
    let mut segments: Vec<&str> = path.split('/').collect();
    if segments.first() == Some(&"") {
        segments.remove(0);
    }

    let mut current = Rc::clone(root);
    let mut children = data_children(&current);
    for segment in segments {
        match children.iter().find(|child| child.name() == segment) {
            Some(hit) => {
                debug!(name = hit.name(), segment, "path segment matched");
                current = Rc::clone(hit);
                children = data_children(&current);
            }
            None => {
                debug!(segment, "path segment matched no child");
                return Err(EmitError::PathNotFound(path.to_string()));
            }
        }
    }

    Ok(current)
}

fn data_children(node: &Rc<Node>) -> Vec<Rc<Node>> {
    node.children()
        .iter()
        .filter(|child| child.kind().is_data_definition())
        .cloned()
        .collect()
}
