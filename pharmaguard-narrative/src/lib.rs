//! # Narrative explanations for risk calls.
//!
//! The annotation pipeline is deterministic and self-contained; a plain-language
//! paragraph explaining each call is an optional extra produced by an external
//! text-generation service. This crate defines the [`Narrator`] seam the pipeline
//! calls through, and a [`GeminiNarrator`] implementation that walks an ordered
//! list of credentials until one of them answers.
//!
//! ```rust,no_run
//! use pharmaguard_narrative::{GeminiNarrator, NarrativeContext, Narrator};
//!
//! # fn main() -> Result<(), pharmaguard_narrative::NarrativeError> {
//! let narrator = GeminiNarrator::builder()
//!     .with_credential("primary-key")
//!     .with_credential("backup-key")
//!     .finish()?;
//!
//! let context = NarrativeContext {
//!     drug: "CODEINE".to_string(),
//!     gene: "CYP2D6".to_string(),
//!     diplotype: "*4/*4".to_string(),
//!     phenotype: "PM".to_string(),
//!     risk_label: "Toxic".to_string(),
//!     severity: "high".to_string(),
//!     variants: vec!["rs3892097".to_string(), "rs1065852".to_string()],
//! };
//! let explanation = narrator.explain(&context)?;
//! println!("{}", explanation.summary);
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod fallback;
pub mod models;
pub mod utils;

pub use client::{GeminiNarrator, GeminiNarratorBuilder, Narrator};
pub use config::{Credential, NarrativeConfig};
pub use error::*;
pub use fallback::try_credentials;
pub use models::{NarrativeContext, NarrativeExplanation};
