//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations
//! must implement. The trait provides a uniform interface for parsing and
//! serializing mind maps.

use crate::error::FormatError;
use crate::tree::MindMap;

/// Trait for mind-map formats
///
/// Implementors provide conversion between a string representation and the
/// [`MindMap`] tree. Formats can support parsing, serialization, or both.
/// Implementations hold only configuration (no mutable state), so a format
/// value can serve any number of concurrent conversions.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<MindMap, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "freemind", "plantuml")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["mm"]), without
    /// the leading dot. Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → MindMap)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (MindMap → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a MindMap
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<MindMap, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a MindMap into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _map: &MindMap) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
