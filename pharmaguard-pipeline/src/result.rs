use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmaguard_core::{Drug, Phenotype, PhenotypeAnnotation, RiskAssessment};
use pharmaguard_narrative::NarrativeExplanation;

/// Everything reported for one requested drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugReport {
    pub drug: Drug,
    /// The drug's primary gene.
    pub gene: String,
    /// Diplotype observed for the gene; absent when the gene had no variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diplotype: Option<String>,
    /// Phenotype the risk was evaluated with.
    pub phenotype: Phenotype,
    pub risk_assessment: RiskAssessment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<NarrativeExplanation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Always true on a returned result; parse failures never produce one.
    pub vcf_parsing_success: bool,
    /// Non-empty data lines in the VCF.
    pub total_lines: usize,
    pub variants_extracted: usize,
    /// Data lines without a complete pharmacogenomic annotation.
    pub records_dropped: usize,
    pub genes_annotated: usize,
    pub narratives_generated: usize,
}

/// Response value for one analysis. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub patient_id: String,
    pub timestamp: DateTime<Utc>,
    /// One annotation per observed gene, in first-seen order.
    pub pharmacogenomic_profile: Vec<PhenotypeAnnotation>,
    /// One report per requested drug, in request order.
    pub risk_assessments: Vec<DrugReport>,
    pub quality_metrics: QualityMetrics,
}

impl AnalysisResult {
    /// First report for `drug`.
    pub fn report(&self, drug: Drug) -> Option<&DrugReport> {
        self.risk_assessments.iter().find(|r| r.drug == drug)
    }

    pub fn annotation(&self, gene: &str) -> Option<&PhenotypeAnnotation> {
        self.pharmacogenomic_profile.iter().find(|a| a.gene == gene)
    }
}
