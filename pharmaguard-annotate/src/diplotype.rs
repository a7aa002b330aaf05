//! Diplotype construction.
//!
//! Only the first two star alleles seen for a gene are paired, even when more
//! were called. A gene with a single observation gets the incomplete sentinel
//! rather than an inferred homozygous call.

use fxhash::FxHashMap;

use pharmaguard_core::{GeneDiplotype, VariantRecord};

/// Records of one gene, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneGroup<'a> {
    pub gene: &'a str,
    pub records: Vec<&'a VariantRecord>,
}

impl<'a> GeneGroup<'a> {
    pub fn diplotype(&self) -> GeneDiplotype {
        match self.records.as_slice() {
            [first, second, ..] => GeneDiplotype::from_alleles(self.gene, &first.star, &second.star),
            _ => GeneDiplotype::incomplete(self.gene),
        }
    }
}

///
/// Group records by gene symbol, keeping genes in first-seen order.
///
pub fn group_by_gene(records: &[VariantRecord]) -> Vec<GeneGroup<'_>> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<GeneGroup> = Vec::new();

    for record in records {
        let slot = *index.entry(record.gene.as_str()).or_insert_with(|| {
            groups.push(GeneGroup {
                gene: record.gene.as_str(),
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    groups
}

///
/// Reduce variant records to one diplotype per observed gene.
///
/// # Arguments
/// - records: extracted variant records, in file order
///
/// # Returns
/// - one [`GeneDiplotype`] per distinct gene, in first-seen order
pub fn build_diplotypes(records: &[VariantRecord]) -> Vec<GeneDiplotype> {
    group_by_gene(records)
        .iter()
        .map(GeneGroup::diplotype)
        .collect()
}
