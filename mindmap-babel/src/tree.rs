//! Core data structures for the mind-map tree.
//!
//! Every format parses into and serializes out of this model. Nodes are
//! plain owned values; a node is owned by its parent (or by the map for
//! top-level nodes), so the tree is acyclic by construction and can be
//! walked recursively without cycle handling.

/// A single mind-map entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    /// Display text. May contain embedded newlines (block text).
    pub label: String,
    /// Optional hyperlink. At most one per node.
    pub link: Option<String>,
    /// Ordered children. Depth is implied by ancestry, never stored.
    pub children: Vec<MapNode>,
}

impl MapNode {
    pub fn new(label: impl Into<String>) -> Self {
        MapNode {
            label: label.into(),
            link: None,
            children: Vec::new(),
        }
    }

    pub fn with_link(label: impl Into<String>, link: impl Into<String>) -> Self {
        MapNode {
            label: label.into(),
            link: Some(link.into()),
            children: Vec::new(),
        }
    }

    pub fn with_children(label: impl Into<String>, children: Vec<MapNode>) -> Self {
        MapNode {
            label: label.into(),
            link: None,
            children,
        }
    }

    pub fn push_child(&mut self, child: MapNode) {
        self.children.push(child);
    }
}

/// The synthetic root container.
///
/// Freemind nominally has a single root node, but the container tolerates
/// and preserves any number of top-level siblings (a forest). An empty map
/// is a valid value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MindMap {
    pub roots: Vec<MapNode>,
}

impl MindMap {
    pub fn new() -> Self {
        MindMap { roots: Vec::new() }
    }

    pub fn with_roots(roots: Vec<MapNode>) -> Self {
        MindMap { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total node count across the whole forest.
    pub fn node_count(&self) -> usize {
        fn count(node: &MapNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }
}
