use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::CoreError;

/// Metabolizer status for a gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phenotype {
    #[serde(rename = "PM")]
    PoorMetabolizer,
    #[serde(rename = "IM")]
    IntermediateMetabolizer,
    #[serde(rename = "NM")]
    NormalMetabolizer,
    #[serde(rename = "RM")]
    RapidMetabolizer,
    #[serde(rename = "URM")]
    UltrarapidMetabolizer,
    #[default]
    Unknown,
}

impl Phenotype {
    pub const ALL: [Phenotype; 6] = [
        Phenotype::PoorMetabolizer,
        Phenotype::IntermediateMetabolizer,
        Phenotype::NormalMetabolizer,
        Phenotype::RapidMetabolizer,
        Phenotype::UltrarapidMetabolizer,
        Phenotype::Unknown,
    ];

    /// Short code, e.g. `PM`.
    pub fn code(&self) -> &'static str {
        match self {
            Phenotype::PoorMetabolizer => "PM",
            Phenotype::IntermediateMetabolizer => "IM",
            Phenotype::NormalMetabolizer => "NM",
            Phenotype::RapidMetabolizer => "RM",
            Phenotype::UltrarapidMetabolizer => "URM",
            Phenotype::Unknown => "Unknown",
        }
    }

    /// Human-readable name, e.g. `Poor Metabolizer`.
    pub fn description(&self) -> &'static str {
        match self {
            Phenotype::PoorMetabolizer => "Poor Metabolizer",
            Phenotype::IntermediateMetabolizer => "Intermediate Metabolizer",
            Phenotype::NormalMetabolizer => "Normal Metabolizer",
            Phenotype::RapidMetabolizer => "Rapid Metabolizer",
            Phenotype::UltrarapidMetabolizer => "Ultrarapid Metabolizer",
            Phenotype::Unknown => "Unknown",
        }
    }
}

impl FromStr for Phenotype {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phenotype::ALL
            .iter()
            .find(|p| p.code().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CoreError::UnknownPhenotype(s.to_string()))
    }
}

impl Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("PM", Phenotype::PoorMetabolizer)]
    #[case("urm", Phenotype::UltrarapidMetabolizer)]
    #[case("Unknown", Phenotype::Unknown)]
    fn test_phenotype_from_code(#[case] code: &str, #[case] expected: Phenotype) {
        assert_eq!(code.parse::<Phenotype>().unwrap(), expected);
    }

    #[rstest]
    fn test_phenotype_from_bad_code() {
        assert!("XM".parse::<Phenotype>().is_err());
    }

    #[rstest]
    fn test_phenotype_serializes_as_code() {
        let json = serde_json::to_string(&Phenotype::IntermediateMetabolizer).unwrap();
        assert_eq!(json, "\"IM\"");
        assert_eq!(Phenotype::default(), Phenotype::Unknown);
    }
}
