use fxhash::FxHashMap;

use pharmaguard_core::{GeneDiplotype, Phenotype};

use crate::tables::PHENOTYPE_TABLE;

/// Gene symbol → resolved phenotype, as consumed by the risk evaluator.
pub type PhenotypeMap = FxHashMap<String, Phenotype>;

///
/// Look up the metabolizer phenotype for a diplotype.
///
/// The diplotype must already be in canonical order; no normalization is done
/// here. Unknown genes and unlisted diplotypes resolve to [`Phenotype::Unknown`].
///
pub fn resolve_phenotype(gene: &str, diplotype: &str) -> Phenotype {
    PHENOTYPE_TABLE
        .get(gene)
        .and_then(|calls| calls.get(diplotype))
        .copied()
        .unwrap_or(Phenotype::Unknown)
}

/// Resolve every diplotype and key the result by gene.
pub fn phenotype_map(diplotypes: &[GeneDiplotype]) -> PhenotypeMap {
    diplotypes
        .iter()
        .map(|d| (d.gene.clone(), resolve_phenotype(&d.gene, &d.diplotype)))
        .collect()
}
