//! # Pharmacogenomic analysis pipeline.
//!
//! Composes the crates of the workspace into a single call: a VCF buffer and a
//! list of drug names go in, an [`AnalysisResult`] with per-gene phenotypes and
//! per-drug risk comes out.
//!
//! ```rust
//! use pharmaguard_pipeline::{AnalysisRequest, Pipeline};
//!
//! # fn main() -> Result<(), pharmaguard_pipeline::PipelineError> {
//! let vcf = "##fileformat=VCFv4.2\n\
//!     #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
//!     chr22\t42130692\trs3892097\tG\tA\t.\tPASS\tGENE=CYP2D6;STAR=*4\n\
//!     chr22\t42126611\trs1065852\tC\tT\t.\tPASS\tGENE=CYP2D6;STAR=*4\n";
//!
//! let result = Pipeline::new().analyze(&AnalysisRequest::new(vcf, "codeine"))?;
//! assert_eq!(result.pharmacogenomic_profile[0].diplotype, "*4/*4");
//! # Ok(())
//! # }
//! ```
pub mod config;
pub mod consts;
pub mod errors;
pub mod pipeline;
pub mod request;
pub mod result;

pub use config::PipelineConfig;
pub use errors::*;
pub use pipeline::Pipeline;
pub use request::{AnalysisRequest, generate_patient_id, parse_drug_list};
pub use result::{AnalysisResult, DrugReport, QualityMetrics};
