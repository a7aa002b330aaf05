//! The orchestrator: VCF bytes and a drug list in, [`AnalysisResult`] out.

use chrono::Utc;
use log::{info, warn};
use rayon::prelude::*;

use pharmaguard_annotate::{PhenotypeMap, build_diplotypes, evaluate_risk, phenotype_map};
use pharmaguard_core::{Drug, INCOMPLETE_DIPLOTYPE, PhenotypeAnnotation};
use pharmaguard_narrative::{GeminiNarrator, NarrativeContext, NarrativeExplanation, Narrator};
use pharmaguard_vcf::extract_variants;

use crate::config::PipelineConfig;
use crate::errors::Result;
use crate::request::AnalysisRequest;
use crate::result::{AnalysisResult, DrugReport, QualityMetrics};

///
/// Pipeline struct, runs extraction, annotation and risk evaluation, and
/// optionally attaches a narrative to each drug.
///
#[derive(Default)]
pub struct Pipeline {
    narrator: Option<Box<dyn Narrator>>,
}

impl Pipeline {
    /// A pipeline without narrative enrichment.
    pub fn new() -> Self {
        Pipeline::default()
    }

    pub fn with_narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.narrator = Some(Box::new(narrator));
        self
    }

    ///
    /// Build a pipeline from config. A Gemini narrator is attached when the
    /// `[narrative]` table is enabled and lists at least one credential.
    ///
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        if !config.narrative.is_usable() {
            info!("Narrative enrichment disabled");
            return Ok(Pipeline::new());
        }
        let narrator = GeminiNarrator::from_config(&config.narrative)?;
        Ok(Pipeline::new().with_narrator(narrator))
    }

    pub fn has_narrator(&self) -> bool {
        self.narrator.is_some()
    }

    ///
    /// Run the full analysis for one request.
    ///
    /// # Arguments
    /// - request: VCF buffer, drug names and optional session token
    ///
    /// # Returns
    /// - the complete result, or a validation or parse error. Narrative
    ///   failures never fail the request.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let (vcf, drugs) = request.validate()?;
        let extraction = extract_variants(vcf)?;

        let diplotypes = build_diplotypes(&extraction.records);
        let phenotypes: PhenotypeMap = phenotype_map(&diplotypes);

        let profile: Vec<PhenotypeAnnotation> = diplotypes
            .into_iter()
            .map(|call| PhenotypeAnnotation {
                phenotype: phenotypes.get(&call.gene).copied().unwrap_or_default(),
                variants: extraction
                    .records
                    .iter()
                    .filter(|r| r.gene == call.gene)
                    .map(|r| r.rsid.clone())
                    .collect(),
                gene: call.gene,
                diplotype: call.diplotype,
            })
            .collect();

        let mut reports: Vec<DrugReport> = drugs
            .iter()
            .map(|&drug| drug_report(drug, &profile, &phenotypes))
            .collect();

        if let Some(narrator) = self.narrator.as_deref() {
            let narratives: Vec<Option<NarrativeExplanation>> = reports
                .par_iter()
                .map(|report| enrich(narrator, report, &profile))
                .collect();
            for (report, narrative) in reports.iter_mut().zip(narratives) {
                report.narrative = narrative;
            }
        }

        let quality_metrics = QualityMetrics {
            vcf_parsing_success: true,
            total_lines: extraction.data_lines,
            variants_extracted: extraction.records.len(),
            records_dropped: extraction.dropped,
            genes_annotated: profile.len(),
            narratives_generated: reports.iter().filter(|r| r.narrative.is_some()).count(),
        };

        let result = AnalysisResult {
            patient_id: request.resolve_patient_id(),
            timestamp: Utc::now(),
            pharmacogenomic_profile: profile,
            risk_assessments: reports,
            quality_metrics,
        };

        info!(
            "Analysis {}: {} genes, {} drugs, {} narratives",
            result.patient_id,
            result.quality_metrics.genes_annotated,
            result.risk_assessments.len(),
            result.quality_metrics.narratives_generated
        );

        Ok(result)
    }
}

fn drug_report(drug: Drug, profile: &[PhenotypeAnnotation], phenotypes: &PhenotypeMap) -> DrugReport {
    let gene = drug.primary_gene();
    let risk_assessment = evaluate_risk(drug, phenotypes);

    DrugReport {
        drug,
        gene: gene.to_string(),
        diplotype: profile
            .iter()
            .find(|a| a.gene == gene)
            .map(|a| a.diplotype.clone()),
        phenotype: phenotypes.get(gene).copied().unwrap_or_default(),
        risk_assessment,
        narrative: None,
    }
}

/// One narrator call; failures are logged and dropped.
fn enrich(
    narrator: &dyn Narrator,
    report: &DrugReport,
    profile: &[PhenotypeAnnotation],
) -> Option<NarrativeExplanation> {
    let variants = profile
        .iter()
        .find(|a| a.gene == report.gene)
        .map(|a| a.variants.clone())
        .unwrap_or_default();

    let context = NarrativeContext {
        drug: report.drug.as_str().to_string(),
        gene: report.gene.clone(),
        diplotype: report
            .diplotype
            .clone()
            .unwrap_or_else(|| INCOMPLETE_DIPLOTYPE.to_string()),
        phenotype: report.phenotype.code().to_string(),
        risk_label: report.risk_assessment.risk_label.as_str().to_string(),
        severity: report.risk_assessment.severity.as_str().to_string(),
        variants,
    };

    match narrator.explain(&context) {
        Ok(explanation) => Some(explanation),
        Err(e) => {
            warn!("No narrative for {}: {}", report.drug, e);
            None
        }
    }
}
