//! What a materialization hands back.

use serde::Serialize;

/// A mirror of a materialized spec: same key structure, but every node
/// carries the absolute path that was created for it.
///
/// Like descriptor trees, mirrors are built once and never mutated after
/// the materializer returns one. Children stay in the order the spec
/// enumerated its keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mirror {
    pub path: String,
    children: Vec<(String, Mirror)>,
}

impl Mirror {
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            children: Vec::new(),
        }
    }

    pub(crate) fn attach(&mut self, key: &str, node: Mirror) {
        self.children.push((key.to_string(), node));
    }

    /// Look up a direct child by its spec key.
    pub fn child(&self, key: &str) -> Option<&Mirror> {
        self.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// `(key, node)` pairs in spec enumeration order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Mirror)> {
        self.children.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Every created path in this subtree, depth-first, excluding the root.
    pub fn paths(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for (_, node) in &self.children {
            out.push(node.path.as_str());
            out.extend(node.paths());
        }
        out
    }
}
