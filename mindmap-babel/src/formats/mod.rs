//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the mind-map tree and text representations.

pub mod freemind;
pub mod plantuml;

pub use freemind::FreemindFormat;
pub use plantuml::PlantumlFormat;
