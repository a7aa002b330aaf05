//! Gene symbols and sentinel values shared across the pipeline.

pub const CYP2D6: &str = "CYP2D6";
pub const CYP2C19: &str = "CYP2C19";
pub const CYP2C9: &str = "CYP2C9";
pub const SLCO1B1: &str = "SLCO1B1";
pub const TPMT: &str = "TPMT";
pub const DPYD: &str = "DPYD";

/// The pharmacogenes with phenotype and risk rules.
pub const SUPPORTED_GENES: [&str; 6] = [CYP2D6, CYP2C19, CYP2C9, SLCO1B1, TPMT, DPYD];

/// Diplotype emitted for a gene with fewer than two observed star alleles.
///
/// It is never present in the phenotype table, so it always resolves to
/// [`Phenotype::Unknown`](crate::Phenotype::Unknown).
pub const INCOMPLETE_DIPLOTYPE: &str = "*?/??";

/// Separator between the two alleles of a diplotype string.
pub const DIPLOTYPE_SEPARATOR: char = '/';
