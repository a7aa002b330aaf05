//! Annotation stages of the pharmacogenomic pipeline.
//!
//! - [`diplotype`]: group variant records by gene and pair the first two star alleles
//! - [`phenotype`]: map `(gene, diplotype)` to a metabolizer phenotype
//! - [`risk`]: map `(drug, phenotype)` to a risk label, severity and confidence
//!
//! All lookups are total. Missing reference data degrades to
//! [`Phenotype::Unknown`](pharmaguard_core::Phenotype::Unknown) or
//! [`RiskRule::UNKNOWN`](pharmaguard_core::RiskRule::UNKNOWN), never to an error.

pub mod diplotype;
pub mod phenotype;
pub mod risk;
pub mod tables;

// re-exports
pub use diplotype::{GeneGroup, build_diplotypes, group_by_gene};
pub use phenotype::{PhenotypeMap, phenotype_map, resolve_phenotype};
pub use risk::{evaluate_risk, risk_rule};
