use serde::{Deserialize, Serialize};

use crate::models::phenotype::Phenotype;

/// Phenotype call for one gene, with the rsIDs behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhenotypeAnnotation {
    pub gene: String,
    pub diplotype: String,
    pub phenotype: Phenotype,
    /// rsIDs of every record for this gene, in file order.
    pub variants: Vec<String>,
}
