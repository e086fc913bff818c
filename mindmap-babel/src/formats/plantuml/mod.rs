//! PlantUML mindmap format
//!
//! A line-oriented text format bracketed by `@startmindmap` / `@endmindmap`
//! sentinels. Each node is one line whose leading run of `*` markers encodes
//! its depth:
//!
//! ```text
//! @startmindmap
//! * Root
//! ** Child
//! *** [[http://example.com Grandchild]]
//! ** :A label
//! spanning two lines;
//! @endmindmap
//! ```
//!
//! Lines starting with `'` are comments. `*_` is a tolerated legacy marker
//! spelling. `:text...;` is block text for labels with embedded newlines.

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::MindMap;

pub mod parser;
pub mod serializer;

pub const START_SENTINEL: &str = "@startmindmap";
pub const END_SENTINEL: &str = "@endmindmap";

/// Format implementation for PlantUML mindmaps.
///
/// By default the parser is lenient: node lines it cannot classify are
/// skipped rather than rejected, so stray formatting does not abort a whole
/// conversion. `strict` turns those skips into parse errors.
#[derive(Debug, Clone, Default)]
pub struct PlantumlFormat {
    strict: bool,
}

impl PlantumlFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(strict: bool) -> Self {
        PlantumlFormat { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Format for PlantumlFormat {
    fn name(&self) -> &str {
        "plantuml"
    }

    fn description(&self) -> &str {
        "PlantUML mindmap format (marker-prefixed lines)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["puml", "plantuml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<MindMap, FormatError> {
        parser::parse(source, self.strict)
    }

    fn serialize(&self, map: &MindMap) -> Result<String, FormatError> {
        Ok(serializer::serialize(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_trait() {
        let format = PlantumlFormat::new();
        assert_eq!(format.name(), "plantuml");
        assert!(format.supports_parsing());
        assert!(format.supports_serialization());
        assert!(format.file_extensions().contains(&"puml"));
        assert!(!format.is_strict());
    }

    #[test]
    fn test_parse_serialize_symmetry() {
        let source = "@startmindmap\n* Root\n** Child\n@endmindmap";
        let format = PlantumlFormat::new();

        let map = format.parse(source).expect("parse");
        let out = format.serialize(&map).expect("serialize");
        assert_eq!(out, source);
    }
}
