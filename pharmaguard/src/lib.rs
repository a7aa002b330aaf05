//! # pharmaguard
//!
//! Umbrella crate for the pharmaguard workspace. Each member is re-exported
//! behind a cargo feature of the same name; `full` enables all of them.
//!
//! ```toml
//! pharmaguard = { version = "0.1", features = ["pipeline"] }
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use pharmaguard_core as core;

#[cfg(feature = "vcf")]
#[doc(inline)]
pub use pharmaguard_vcf as vcf;

#[cfg(feature = "annotate")]
#[doc(inline)]
pub use pharmaguard_annotate as annotate;

#[cfg(feature = "narrative")]
#[doc(inline)]
pub use pharmaguard_narrative as narrative;

#[cfg(feature = "pipeline")]
#[doc(inline)]
pub use pharmaguard_pipeline as pipeline;
