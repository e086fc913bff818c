//! PlantUML mindmap serializer (tree → marker lines).
//!
//! Depth-first walk of the forest; each node becomes one marker-prefixed
//! line (or one `:...;` block when its effective text contains a newline).
//!
//! Known limitation, inherited from the format itself: a label that starts
//! with `*` characters serializes to a line indistinguishable from a deeper
//! node, and nothing escapes it. We emit it as-is rather than guess.

use crate::common::links;
use crate::tree::{MapNode, MindMap};

use super::{END_SENTINEL, START_SENTINEL};

/// Serialize a mind map to PlantUML text.
///
/// An empty map produces exactly the two sentinel lines.
pub fn serialize(map: &MindMap) -> String {
    let mut lines = vec![START_SENTINEL.to_string()];
    for root in &map.roots {
        emit_node(root, 1, &mut lines);
    }
    lines.push(END_SENTINEL.to_string());
    lines.join("\n")
}

fn emit_node(node: &MapNode, depth: usize, lines: &mut Vec<String>) {
    let text = match &node.link {
        Some(link) => links::encode_link(&node.label, link),
        None => node.label.clone(),
    };

    let markers = "*".repeat(depth);
    if text.contains('\n') {
        // Block form; the text itself spans the following raw lines.
        lines.push(format!("{markers} :{text};"));
    } else {
        lines.push(format!("{markers} {text}"));
    }

    for child in &node.children {
        emit_node(child, depth + 1, lines);
    }
}
