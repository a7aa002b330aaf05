use pharmaguard_core::{Drug, Phenotype, RiskAssessment, RiskRule};

use crate::phenotype::PhenotypeMap;
use crate::tables::RISK_RULES;

///
/// Look up the rule for a gene and phenotype, falling back to [`RiskRule::UNKNOWN`].
///
pub fn risk_rule(gene: &str, phenotype: Phenotype) -> RiskRule {
    RISK_RULES
        .get(gene)
        .and_then(|rules| rules.get(&phenotype))
        .copied()
        .unwrap_or(RiskRule::UNKNOWN)
}

///
/// Classify the risk of a drug for a patient.
///
/// # Arguments
/// - drug: one of the supported drugs
/// - phenotypes: phenotype per observed gene
///
/// # Returns
/// - the risk assessment; a gene that was never observed is treated as
///   [`Phenotype::Unknown`]
pub fn evaluate_risk(drug: Drug, phenotypes: &PhenotypeMap) -> RiskAssessment {
    let gene = drug.primary_gene();
    let phenotype = phenotypes.get(gene).copied().unwrap_or_default();

    RiskAssessment::from_rule(drug, risk_rule(gene, phenotype))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmaguard_core::{RiskLabel, Severity};
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn phenotypes(entries: &[(&str, Phenotype)]) -> PhenotypeMap {
        entries
            .iter()
            .map(|(gene, p)| (gene.to_string(), *p))
            .collect()
    }

    #[rstest]
    #[case(Drug::Codeine, Phenotype::PoorMetabolizer, RiskLabel::Toxic, Severity::High, 0.95)]
    #[case(Drug::Codeine, Phenotype::UltrarapidMetabolizer, RiskLabel::Toxic, Severity::Critical, 0.97)]
    #[case(Drug::Codeine, Phenotype::RapidMetabolizer, RiskLabel::AdjustDosage, Severity::Moderate, 0.9)]
    #[case(Drug::Clopidogrel, Phenotype::PoorMetabolizer, RiskLabel::Ineffective, Severity::High, 0.95)]
    #[case(Drug::Clopidogrel, Phenotype::RapidMetabolizer, RiskLabel::Safe, Severity::Low, 0.9)]
    #[case(Drug::Warfarin, Phenotype::IntermediateMetabolizer, RiskLabel::AdjustDosage, Severity::Moderate, 0.9)]
    #[case(Drug::Simvastatin, Phenotype::NormalMetabolizer, RiskLabel::Safe, Severity::None, 0.98)]
    #[case(Drug::Azathioprine, Phenotype::PoorMetabolizer, RiskLabel::Toxic, Severity::Critical, 0.97)]
    #[case(Drug::Azathioprine, Phenotype::IntermediateMetabolizer, RiskLabel::AdjustDosage, Severity::High, 0.9)]
    #[case(Drug::Fluorouracil, Phenotype::UltrarapidMetabolizer, RiskLabel::Safe, Severity::None, 0.9)]
    fn test_evaluate_risk_rules(
        #[case] drug: Drug,
        #[case] phenotype: Phenotype,
        #[case] label: RiskLabel,
        #[case] severity: Severity,
        #[case] confidence: f64,
    ) {
        let map = phenotypes(&[(drug.primary_gene(), phenotype)]);
        let assessment = evaluate_risk(drug, &map);

        assert_eq!(assessment.drug, drug);
        assert_eq!(assessment.risk_label, label);
        assert_eq!(assessment.severity, severity);
        assert_eq!(assessment.confidence_score, confidence);
    }

    #[rstest]
    fn test_unobserved_gene_falls_back() {
        let map = phenotypes(&[("CYP2C9", Phenotype::PoorMetabolizer)]);
        let assessment = evaluate_risk(Drug::Codeine, &map);

        assert_eq!(assessment.rule(), RiskRule::UNKNOWN);
    }

    #[rstest]
    fn test_every_drug_and_phenotype_is_total() {
        for drug in Drug::ALL {
            for phenotype in Phenotype::ALL {
                let map = phenotypes(&[(drug.primary_gene(), phenotype)]);
                let assessment = evaluate_risk(drug, &map);
                assert!((0.0..=1.0).contains(&assessment.confidence_score));
                if phenotype == Phenotype::Unknown {
                    assert_eq!(assessment.rule(), RiskRule::UNKNOWN);
                }
            }
        }
    }

    #[rstest]
    fn test_gene_without_rules() {
        assert_eq!(risk_rule("BRCA2", Phenotype::PoorMetabolizer), RiskRule::UNKNOWN);
    }
}
