use std::str::FromStr;

use rand::Rng;
use rand::distr::Alphanumeric;

use pharmaguard_core::Drug;

use crate::consts::{DRUG_LIST_DELIMITERS, PATIENT_ID_LEN, PATIENT_ID_PREFIX};
use crate::errors::ValidationError;

/// What an external caller hands to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Raw VCF bytes; `None` when no file was supplied.
    pub vcf: Option<Vec<u8>>,
    /// Drug names as given, before validation.
    pub drugs: Vec<String>,
    /// Session token to reuse as the patient identifier.
    pub patient_id: Option<String>,
}

impl AnalysisRequest {
    pub fn new(vcf: impl Into<Vec<u8>>, drugs: &str) -> Self {
        AnalysisRequest {
            vcf: Some(vcf.into()),
            drugs: parse_drug_list(drugs),
            patient_id: None,
        }
    }

    pub fn with_patient_id(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }

    ///
    /// Check the request and resolve the drug names.
    ///
    /// # Returns
    /// - the VCF buffer and the requested drugs in request order, or the first
    ///   validation failure (missing file, then empty list, then unknown names)
    pub fn validate(&self) -> Result<(&[u8], Vec<Drug>), ValidationError> {
        let vcf = self.vcf.as_deref().ok_or(ValidationError::MissingVcf)?;

        let names: Vec<&str> = self
            .drugs
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .collect();
        if names.is_empty() {
            return Err(ValidationError::EmptyDrugList);
        }

        let mut drugs = Vec::with_capacity(names.len());
        let mut unrecognized = Vec::new();
        for name in names {
            match Drug::from_str(name) {
                Ok(drug) => drugs.push(drug),
                Err(_) => unrecognized.push(name.to_uppercase()),
            }
        }

        if !unrecognized.is_empty() {
            return Err(ValidationError::UnrecognizedDrugs(unrecognized));
        }
        Ok((vcf, drugs))
    }

    /// The caller's token if it gave one, otherwise a fresh one.
    pub fn resolve_patient_id(&self) -> String {
        match self.patient_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => generate_patient_id(),
        }
    }
}

///
/// Split a delimited drug list. Commas, semicolons, pipes and whitespace all
/// separate names; order and duplicates are kept.
///
pub fn parse_drug_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| DRUG_LIST_DELIMITERS.contains(&c) || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// `PG-` followed by ten upper-case alphanumerics.
pub fn generate_patient_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(PATIENT_ID_LEN)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    format!("{}{}", PATIENT_ID_PREFIX, suffix)
}
