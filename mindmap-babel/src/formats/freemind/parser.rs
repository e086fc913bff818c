//! Freemind XML parser (tree-as-XML → tree).

use crate::error::FormatError;
use crate::tree::{MapNode, MindMap};
use roxmltree::Node;

/// Parse Freemind/Freeplane XML into a [`MindMap`].
///
/// Accepts either a `<map>` root (its direct `<node>` children become the
/// map roots) or a bare `<node>` root. Any other root element yields an
/// empty map rather than an error; only malformed markup is rejected.
pub fn parse(source: &str) -> Result<MindMap, FormatError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| FormatError::ParseError(format!("XML parsing error: {e}")))?;

    let root = doc.root_element();
    let roots = match root.tag_name().name() {
        "map" => node_children(root).map(parse_node).collect(),
        "node" => vec![parse_node(root)],
        _ => Vec::new(),
    };

    Ok(MindMap::with_roots(roots))
}

fn parse_node(element: Node) -> MapNode {
    let label = element.attribute("TEXT").unwrap_or("").to_string();

    // Freeplane stores links in a hook element; only the first non-empty
    // URI counts, matching the one-link-per-node model.
    let link = element
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "hook")
        .find_map(|hook| {
            hook.attribute("URI")
                .filter(|uri| !uri.is_empty())
                .map(str::to_string)
        });

    let children = node_children(element).map(parse_node).collect();

    MapNode {
        label,
        link,
        children,
    }
}

fn node_children<'a, 'input>(element: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    element
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "node")
}
