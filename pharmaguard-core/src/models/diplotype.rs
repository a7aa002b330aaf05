use serde::{Deserialize, Serialize};

use crate::consts::{DIPLOTYPE_SEPARATOR, INCOMPLETE_DIPLOTYPE};

/// The two-allele call for one gene, in canonical `"<low>/<high>"` form.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct GeneDiplotype {
    pub gene: String,
    pub diplotype: String,
}

impl GeneDiplotype {
    ///
    /// Build a diplotype from two star alleles. The alleles are ordered
    /// lexicographically, so `("*4", "*1")` and `("*1", "*4")` give the same call.
    ///
    pub fn from_alleles(gene: &str, first: &str, second: &str) -> Self {
        let (low, high) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };

        GeneDiplotype {
            gene: gene.to_string(),
            diplotype: format!("{}{}{}", low, DIPLOTYPE_SEPARATOR, high),
        }
    }

    /// Diplotype for a gene that did not have two star alleles to pair.
    pub fn incomplete(gene: &str) -> Self {
        GeneDiplotype {
            gene: gene.to_string(),
            diplotype: INCOMPLETE_DIPLOTYPE.to_string(),
        }
    }

    pub fn is_incomplete(&self) -> bool {
        self.diplotype == INCOMPLETE_DIPLOTYPE
    }

    /// Split the diplotype into its two alleles. `None` for the incomplete sentinel.
    pub fn alleles(&self) -> Option<(&str, &str)> {
        if self.is_incomplete() {
            return None;
        }
        self.diplotype.split_once(DIPLOTYPE_SEPARATOR)
    }
}
