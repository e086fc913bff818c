//! Helpers for the bracketed-link form shared by node texts.
//!
//! The inline syntax is `[[URL]]` or `[[URL LABEL]]`. The tree model keeps
//! the link out of band (`MapNode::link`), so serializers fold it back into
//! the text and parsers extract it out again.
//!
//! Only the first bracketed span in a text is treated as the node's link;
//! any further `[[...]]` occurrences are left in the label untouched. A node
//! carries at most one link.

use once_cell::sync::Lazy;
use regex::Regex;

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.*?)(?: (.*?))?\]\]").expect("link regex"));

/// Extract the first bracketed link from a node text.
///
/// Returns the text with the bracketed span replaced by its label (or by
/// the URL when no label is present), and the URL if one was found.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     extract_link("see [[http://x.com docs]] here"),
///     ("see docs here".to_string(), Some("http://x.com".to_string()))
/// );
/// ```
pub fn extract_link(text: &str) -> (String, Option<String>) {
    if let Some(caps) = LINK_RE.captures(text) {
        if let (Some(whole), Some(url)) = (caps.get(0), caps.get(1)) {
            let display = match caps.get(2) {
                Some(label) if !label.as_str().is_empty() => label.as_str(),
                _ => url.as_str(),
            };
            let mut replaced = String::with_capacity(text.len());
            replaced.push_str(&text[..whole.start()]);
            replaced.push_str(display);
            replaced.push_str(&text[whole.end()..]);
            return (replaced, Some(url.as_str().to_string()));
        }
    }
    (text.to_string(), None)
}

/// Fold a label and link back into the bracketed inline form.
///
/// A label equal to its link uses the `[[url]]` shorthand.
pub fn encode_link(label: &str, link: &str) -> String {
    if label == link {
        format!("[[{link}]]")
    } else {
        format!("[[{link} {label}]]")
    }
}
