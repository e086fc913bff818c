//! Freemind XML serializer (tree → tree-as-XML).
//!
//! The XML is written by hand (two-space indent per level); the node shapes
//! involved are too few to justify an XML writer dependency. Attribute
//! values escape the XML special characters and encode embedded newlines as
//! `&#10;` so block-text labels survive the attribute position.

use crate::tree::{MapNode, MindMap};

/// Serialize a mind map to Freemind XML with the given `version` attribute.
pub fn serialize(map: &MindMap, version: &str) -> String {
    let mut output = String::new();

    if map.roots.is_empty() {
        output.push_str(&format!("<map version=\"{}\"/>", escape_attr(version)));
        return output;
    }

    output.push_str(&format!("<map version=\"{}\">\n", escape_attr(version)));
    for root in &map.roots {
        write_node(root, 1, &mut output);
    }
    output.push_str("</map>");
    output
}

fn write_node(node: &MapNode, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    let open = format!(
        "{indent}<node TEXT=\"{}\" FOLDED=\"false\"",
        escape_attr(&node.label)
    );

    if node.link.is_none() && node.children.is_empty() {
        output.push_str(&open);
        output.push_str("/>\n");
        return;
    }

    output.push_str(&open);
    output.push_str(">\n");

    if let Some(link) = &node.link {
        output.push_str(&format!(
            "{indent}  <hook NAME=\"ExternalObject\" URI=\"{}\"/>\n",
            escape_attr(link)
        ));
    }

    for child in &node.children {
        write_node(child, indent_level + 1, output);
    }

    output.push_str(&format!("{indent}</node>\n"));
}

/// Escape an XML attribute value, newlines included.
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\n', "&#10;")
}
