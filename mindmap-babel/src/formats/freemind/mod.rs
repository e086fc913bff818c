//! Freemind / Freeplane XML format
//!
//! Nodes nest as `<node>` elements carrying their label in a `TEXT`
//! attribute; a hyperlink is a `<hook>` child with a `URI` attribute:
//!
//! ```text
//! <map version="freeplane 1.9.13">
//!   <node TEXT="Root" FOLDED="false">
//!     <node TEXT="Link" FOLDED="false">
//!       <hook NAME="ExternalObject" URI="http://example.com"/>
//!     </node>
//!   </node>
//! </map>
//! ```
//!
//! The `version` attribute carries no semantics for the conversion; it is
//! explicit configuration on [`FreemindFormat`] rather than a baked-in
//! constant, defaulted to the Freeplane release the output mimics.

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::MindMap;

pub mod parser;
pub mod serializer;

/// Version attribute written on the `<map>` element by default.
pub const DEFAULT_XML_VERSION: &str = "freeplane 1.9.13";

/// Format implementation for Freemind/Freeplane XML.
#[derive(Debug, Clone)]
pub struct FreemindFormat {
    xml_version: String,
}

impl FreemindFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(version: impl Into<String>) -> Self {
        FreemindFormat {
            xml_version: version.into(),
        }
    }

    pub fn xml_version(&self) -> &str {
        &self.xml_version
    }
}

impl Default for FreemindFormat {
    fn default() -> Self {
        FreemindFormat {
            xml_version: DEFAULT_XML_VERSION.to_string(),
        }
    }
}

impl Format for FreemindFormat {
    fn name(&self) -> &str {
        "freemind"
    }

    fn description(&self) -> &str {
        "Freemind/Freeplane XML mind map"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<MindMap, FormatError> {
        parser::parse(source)
    }

    fn serialize(&self, map: &MindMap) -> Result<String, FormatError> {
        Ok(serializer::serialize(map, &self.xml_version))
    }
}
