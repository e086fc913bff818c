//! Bidirectional conversion between mind-map formats
//!
//!     This crate converts between the Freemind/Freeplane XML mind-map format
//!     (.mm) and the PlantUML mindmap text format (.puml), through one shared
//!     tree model.
//!
//!     This is a pure lib: it powers the mindmap CLI but is shell agnostic,
//!     that is no code here does file I/O, prints, or reads env vars. Each
//!     conversion is a one-shot pure function over its input, with no shared
//!     mutable state, so conversions are safe to run concurrently.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── tree.rs                 # Shared MindMap / MapNode tree model
//!     ├── common
//!     │   └── links.rs            # [[url label]] inline-link helpers
//!     └── formats
//!         ├── freemind            # XML parse (roxmltree) + hand-written serialize
//!         │   ├── parser.rs
//!         │   ├── serializer.rs
//!         │   └── mod.rs
//!         └── plantuml            # marker-line parse + serialize
//!             ├── parser.rs
//!             ├── serializer.rs
//!             └── mod.rs
//!
//! Core Algorithms
//!
//!     The interesting work is on the PlantUML side: reconstructing a nested
//!     tree from flat marker-prefixed lines, and the reverse. The builder
//!     keeps a depth-ordered ancestor stack (slot = depth - 1) and attaches
//!     each node under the nearest surviving ancestor, which makes depth
//!     jumps and forests legal by construction. The serializer is a plain
//!     depth-first walk.
//!
//! Lossiness
//!
//!     The two formats agree on labels, links, and nesting, so conversion of
//!     that data round-trips. Anything else a Freemind file may carry
//!     (styles, icons, colors, folding state) is out of scope and dropped.
//!     The PlantUML side has a known ambiguity of its own: a label starting
//!     with `*` characters is emitted as-is and cannot be told apart from a
//!     deeper node line when read back.
//!
//! Format Selection
//!
//!     Formats implement the Format trait (a parse() and/or serialize()
//!     method, a name, and file extensions) and register in FormatRegistry.
//!     The registry never sniffs content; callers pick a direction by name or
//!     file extension.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod tree;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
pub use tree::{MapNode, MindMap};

/// Convert Freemind XML text to PlantUML mindmap text, with default-configured
/// formats.
pub fn freemind_to_plantuml(source: &str) -> Result<String, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(source, "freemind")?;
    registry.serialize(&map, "plantuml")
}

/// Convert PlantUML mindmap text to Freemind XML text, with default-configured
/// formats.
pub fn plantuml_to_freemind(source: &str) -> Result<String, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(source, "plantuml")?;
    registry.serialize(&map, "freemind")
}
