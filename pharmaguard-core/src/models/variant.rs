use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// VariantRecord struct, one pharmacogenomic call taken from a VCF data line
/// that carried both a `GENE` and a `STAR` annotation.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct VariantRecord {
    pub chromosome: String,
    /// 1-based position, as written in the VCF.
    pub position: u64,
    pub rsid: String,
    pub ref_allele: String,
    /// First ALT allele only.
    pub alt_allele: String,
    pub gene: String,
    pub star: String,
}

impl VariantRecord {
    ///
    /// Get the tab-delimited representation of the record
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chromosome,
            self.position,
            self.rsid,
            self.ref_allele,
            self.alt_allele,
            self.gene,
            self.star
        )
    }
}

impl Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_variant_as_string() {
        let record = VariantRecord {
            chromosome: "chr22".to_string(),
            position: 42130692,
            rsid: "rs3892097".to_string(),
            ref_allele: "G".to_string(),
            alt_allele: "A".to_string(),
            gene: "CYP2D6".to_string(),
            star: "*4".to_string(),
        };

        assert_eq!(
            record.to_string(),
            "chr22\t42130692\trs3892097\tG\tA\tCYP2D6\t*4"
        );
    }
}
