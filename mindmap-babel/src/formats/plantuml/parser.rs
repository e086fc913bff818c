//! PlantUML mindmap parser (marker lines → tree).
//!
//! Scans the region between the two sentinel lines, classifies each line,
//! and places nodes with a depth-ordered ancestor stack. Slot `d - 1` of the
//! stack is the currently open node at depth `d`, so finding the parent of a
//! new node is a truncate, and arbitrary depth jumps attach under the
//! nearest surviving ancestor without error.

use crate::common::links;
use crate::error::FormatError;
use crate::tree::{MapNode, MindMap};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{END_SENTINEL, START_SENTINEL};

static NODE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\*+)_?\s*(.*)$").expect("node line regex"));

/// A classified node line: depth from the marker run, trimmed text, and
/// whether the text opened a `:`-block.
struct NodeLine {
    depth: usize,
    text: String,
    block_start: bool,
}

/// Classify a single line. Returns None for anything that is not a node
/// line (the caller decides whether that is ignorable or an error).
fn classify_node_line(line: &str) -> Option<NodeLine> {
    let caps = NODE_LINE_RE.captures(line)?;
    let depth = caps.get(1)?.as_str().len();
    let mut text = caps.get(2)?.as_str().trim();

    let block_start = text.starts_with(':');
    if block_start {
        text = text[1..].trim();
    }

    Some(NodeLine {
        depth,
        text: text.to_string(),
        block_start,
    })
}

/// Parse PlantUML mindmap text into a [`MindMap`].
///
/// With `strict` set, lines between the sentinels that are neither blank,
/// comments, nor node lines are rejected instead of skipped.
pub fn parse(source: &str, strict: bool) -> Result<MindMap, FormatError> {
    let lines: Vec<&str> = source.lines().collect();

    let start_idx = lines
        .iter()
        .position(|l| l.trim().starts_with(START_SENTINEL))
        .ok_or_else(|| {
            FormatError::ParseError(format!("not a PlantUML mindmap: missing {START_SENTINEL}"))
        })?;
    let end_idx = lines
        .iter()
        .position(|l| l.trim().starts_with(END_SENTINEL))
        .ok_or_else(|| {
            FormatError::ParseError(format!("not a PlantUML mindmap: missing {END_SENTINEL}"))
        })?;
    if end_idx <= start_idx {
        return Err(FormatError::ParseError(format!(
            "{END_SENTINEL} must come after {START_SENTINEL}"
        )));
    }

    let mut roots: Vec<MapNode> = Vec::new();
    // Ancestor stack as a path of child indices from the forest root;
    // its length is the depth of the deepest open node.
    let mut stack: Vec<usize> = Vec::new();
    let mut first_node_found = false;

    let mut i = start_idx + 1;
    while i < end_idx {
        let stripped = lines[i].trim();

        if stripped.is_empty() || stripped.starts_with('\'') {
            i += 1;
            continue;
        }

        let Some(node_line) = classify_node_line(lines[i]) else {
            if strict {
                return Err(FormatError::ParseError(format!(
                    "unrecognized line {}: '{stripped}'",
                    i + 1
                )));
            }
            // lenient-skip: stray non-node lines are tolerated
            i += 1;
            continue;
        };
        i += 1;

        let mut text = node_line.text;
        if node_line.block_start {
            if let Some(single_line) = text.strip_suffix(';') {
                text = single_line.to_string();
            } else {
                text = consume_block_text(&lines, &mut i, end_idx, text)?;
            }
        }

        let (label, link) = links::extract_link(&text);
        let node = MapNode {
            label,
            link,
            children: Vec::new(),
        };

        if !first_node_found {
            // The first node is always top-level, whatever its depth.
            roots.push(node);
            stack.push(roots.len() - 1);
            first_node_found = true;
            continue;
        }

        stack.truncate(node_line.depth.saturating_sub(1));

        if stack.is_empty() {
            // Another top-level sibling; forests are legal.
            roots.push(node);
            stack.push(roots.len() - 1);
        } else {
            let parent = node_at_path(&mut roots, &stack);
            parent.children.push(node);
            stack.push(parent.children.len() - 1);
        }
    }

    Ok(MindMap::with_roots(roots))
}

/// Consume continuation lines of an open `:`-block up to (excluding) the end
/// sentinel. Continuation lines are kept verbatim; the terminating line has
/// surrounding whitespace and the `;` stripped.
fn consume_block_text(
    lines: &[&str],
    i: &mut usize,
    end_idx: usize,
    first: String,
) -> Result<String, FormatError> {
    let mut collected = vec![first];
    while *i < end_idx {
        let raw = lines[*i];
        *i += 1;
        let trimmed = raw.trim();
        if let Some(last) = trimmed.strip_suffix(';') {
            collected.push(last.to_string());
            return Ok(collected.join("\n"));
        }
        collected.push(raw.to_string());
    }
    Err(FormatError::ParseError(
        "unterminated block text: missing closing ';'".to_string(),
    ))
}

/// Walk the child-index path down from the forest roots to the open node it
/// denotes. The path is never empty and always valid: entries are only
/// pushed for nodes that were just attached.
fn node_at_path<'a>(roots: &'a mut [MapNode], path: &[usize]) -> &'a mut MapNode {
    let mut node = &mut roots[path[0]];
    for &idx in &path[1..] {
        node = &mut node.children[idx];
    }
    node
}
