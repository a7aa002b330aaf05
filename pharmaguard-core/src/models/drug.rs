use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::{CYP2C19, CYP2C9, CYP2D6, DPYD, SLCO1B1, TPMT};
use crate::errors::CoreError;

/// The closed set of drugs the risk evaluator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Drug {
    Codeine,
    Warfarin,
    Clopidogrel,
    Simvastatin,
    Azathioprine,
    Fluorouracil,
}

impl Drug {
    pub const ALL: [Drug; 6] = [
        Drug::Codeine,
        Drug::Warfarin,
        Drug::Clopidogrel,
        Drug::Simvastatin,
        Drug::Azathioprine,
        Drug::Fluorouracil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Drug::Codeine => "CODEINE",
            Drug::Warfarin => "WARFARIN",
            Drug::Clopidogrel => "CLOPIDOGREL",
            Drug::Simvastatin => "SIMVASTATIN",
            Drug::Azathioprine => "AZATHIOPRINE",
            Drug::Fluorouracil => "FLUOROURACIL",
        }
    }

    ///
    /// The single pharmacogene whose phenotype drives this drug's risk.
    ///
    pub fn primary_gene(&self) -> &'static str {
        match self {
            Drug::Codeine => CYP2D6,
            Drug::Warfarin => CYP2C9,
            Drug::Clopidogrel => CYP2C19,
            Drug::Simvastatin => SLCO1B1,
            Drug::Azathioprine => TPMT,
            Drug::Fluorouracil => DPYD,
        }
    }
}

impl FromStr for Drug {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        Drug::ALL
            .iter()
            .find(|d| d.as_str() == name)
            .copied()
            .ok_or(CoreError::UnknownDrug(name))
    }
}

impl Display for Drug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
