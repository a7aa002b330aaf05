//! # Core data model for pharmacogenomic annotation.
//!
//! This crate holds the value types that flow through the annotation pipeline:
//! variant records pulled out of a VCF, per-gene diplotypes, metabolizer
//! phenotypes, the closed set of supported drugs and the risk classification
//! attached to each of them. Every type here is an immutable value; the crates
//! that build on top of it never mutate a stage's output in place.
//!
pub mod consts;
pub mod errors;
pub mod models;

// re-expose core types
pub use consts::*;
pub use errors::*;
pub use models::*;
