//! # VCF variant extraction for pharmacogenomics.
//!
//! Turns the raw bytes of an uploaded VCF into [`VariantRecord`]s. The dialect is a
//! curated one: only data lines whose INFO column carries both a `GENE` and a `STAR`
//! annotation (plus an rsID, CHROM, REF and ALT) become records; everything else is
//! skipped without complaint. Structural problems, on the other hand, abort the
//! whole extraction with a [`ParseError`].
//!
//! ```no_run
//! use pharmaguard_vcf::{extract_variants, read_vcf_file};
//!
//! let bytes = read_vcf_file("patient.vcf").unwrap();
//! let extraction = extract_variants(&bytes).unwrap();
//! for record in &extraction.records {
//!     println!("{}", record);
//! }
//! ```
//!
//! [`VariantRecord`]: pharmaguard_core::VariantRecord
pub mod consts;
pub mod error;
pub mod extract;
pub mod header;
pub mod info;
pub mod io;

// re-expose core functions
pub use error::*;
pub use extract::{VariantExtraction, extract_variants};
pub use header::{InfoDefinition, InfoNumber, InfoSchema, InfoType};
pub use info::{InfoField, InfoValue};
pub use io::read_vcf_file;
