//! Format-agnostic helpers shared by format implementations.

pub mod links;
