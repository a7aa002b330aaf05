//! Static reference tables.
//!
//! These are illustrative fixture data, not CPIC-certified guidance. Both tables
//! are two-level maps keyed by gene symbol; they are built once and only ever read.

use fxhash::FxHashMap;
use once_cell::sync::Lazy;

use pharmaguard_core::{
    CYP2C9, CYP2C19, CYP2D6, DPYD, Phenotype, RiskLabel, RiskRule, SLCO1B1, Severity, TPMT,
};

use Phenotype::*;

type DiplotypeTable = FxHashMap<&'static str, Phenotype>;
type RuleTable = FxHashMap<Phenotype, RiskRule>;

/// gene → exact diplotype string → phenotype
pub static PHENOTYPE_TABLE: Lazy<FxHashMap<&'static str, DiplotypeTable>> = Lazy::new(|| {
    let genes: [(&str, &[(&str, Phenotype)]); 6] = [
        (
            CYP2D6,
            &[
                ("*1/*1", NormalMetabolizer),
                ("*1/*2", NormalMetabolizer),
                ("*2/*2", NormalMetabolizer),
                ("*1/*4", IntermediateMetabolizer),
                ("*1/*41", IntermediateMetabolizer),
                ("*1/*10", IntermediateMetabolizer),
                ("*10/*10", IntermediateMetabolizer),
                ("*4/*4", PoorMetabolizer),
                ("*3/*4", PoorMetabolizer),
                ("*4/*5", PoorMetabolizer),
                ("*5/*5", PoorMetabolizer),
                ("*1/*17", RapidMetabolizer),
                ("*1/*1xN", UltrarapidMetabolizer),
                ("*1/*2xN", UltrarapidMetabolizer),
            ],
        ),
        (
            CYP2C19,
            &[
                ("*1/*1", NormalMetabolizer),
                ("*1/*17", RapidMetabolizer),
                ("*17/*17", UltrarapidMetabolizer),
                ("*17/*2", IntermediateMetabolizer),
                ("*2/*2", PoorMetabolizer),
                ("*2/*3", PoorMetabolizer),
                ("*3/*3", PoorMetabolizer),
            ],
        ),
        (
            CYP2C9,
            &[
                ("*1/*1", NormalMetabolizer),
                ("*1/*2", IntermediateMetabolizer),
                ("*1/*3", IntermediateMetabolizer),
                ("*2/*2", IntermediateMetabolizer),
                ("*2/*3", PoorMetabolizer),
                ("*3/*3", PoorMetabolizer),
            ],
        ),
        (
            SLCO1B1,
            &[
                ("*1/*1", NormalMetabolizer),
                ("*1/*5", IntermediateMetabolizer),
                ("*1/*15", IntermediateMetabolizer),
                ("*5/*5", PoorMetabolizer),
                ("*15/*15", PoorMetabolizer),
                ("*15/*5", PoorMetabolizer),
            ],
        ),
        (
            TPMT,
            &[
                ("*1/*1", NormalMetabolizer),
                ("*1/*2", IntermediateMetabolizer),
                ("*1/*3A", IntermediateMetabolizer),
                ("*1/*3C", IntermediateMetabolizer),
                ("*3A/*3A", PoorMetabolizer),
                ("*3A/*3C", PoorMetabolizer),
                ("*2/*3A", PoorMetabolizer),
            ],
        ),
        (
            DPYD,
            &[
                ("*1/*1", NormalMetabolizer),
                ("*1/*2A", IntermediateMetabolizer),
                ("*1/*13", IntermediateMetabolizer),
                ("*2A/*2A", PoorMetabolizer),
                ("*13/*2A", PoorMetabolizer),
                ("*13/*13", PoorMetabolizer),
            ],
        ),
    ];

    genes
        .into_iter()
        .map(|(gene, calls)| (gene, calls.iter().copied().collect::<DiplotypeTable>()))
        .collect()
});

const fn rule(risk_label: RiskLabel, severity: Severity, confidence_score: f64) -> RiskRule {
    RiskRule::new(risk_label, severity, confidence_score)
}

/// gene → phenotype → risk rule
pub static RISK_RULES: Lazy<FxHashMap<&'static str, RuleTable>> = Lazy::new(|| {
    use RiskLabel::*;

    let unknown = RiskRule::UNKNOWN;
    let genes: [(&str, [(Phenotype, RiskRule); 6]); 6] = [
        (
            CYP2D6,
            [
                (PoorMetabolizer, rule(Toxic, Severity::High, 0.95)),
                (IntermediateMetabolizer, rule(AdjustDosage, Severity::Moderate, 0.9)),
                (NormalMetabolizer, rule(Safe, Severity::None, 0.98)),
                (RapidMetabolizer, rule(AdjustDosage, Severity::Moderate, 0.9)),
                (UltrarapidMetabolizer, rule(Toxic, Severity::Critical, 0.97)),
                (Phenotype::Unknown, unknown),
            ],
        ),
        (
            CYP2C19,
            [
                (PoorMetabolizer, rule(Ineffective, Severity::High, 0.95)),
                (IntermediateMetabolizer, rule(AdjustDosage, Severity::Moderate, 0.9)),
                (NormalMetabolizer, rule(Safe, Severity::None, 0.98)),
                (RapidMetabolizer, rule(Safe, Severity::Low, 0.9)),
                (UltrarapidMetabolizer, rule(Safe, Severity::Low, 0.9)),
                (Phenotype::Unknown, unknown),
            ],
        ),
        (
            CYP2C9,
            [
                (PoorMetabolizer, rule(Toxic, Severity::High, 0.95)),
                (IntermediateMetabolizer, rule(AdjustDosage, Severity::Moderate, 0.9)),
                (NormalMetabolizer, rule(Safe, Severity::None, 0.98)),
                (RapidMetabolizer, rule(Safe, Severity::None, 0.9)),
                (UltrarapidMetabolizer, rule(Safe, Severity::None, 0.9)),
                (Phenotype::Unknown, unknown),
            ],
        ),
        (
            SLCO1B1,
            [
                (PoorMetabolizer, rule(Toxic, Severity::High, 0.95)),
                (IntermediateMetabolizer, rule(AdjustDosage, Severity::Moderate, 0.9)),
                (NormalMetabolizer, rule(Safe, Severity::None, 0.98)),
                (RapidMetabolizer, rule(Safe, Severity::None, 0.9)),
                (UltrarapidMetabolizer, rule(Safe, Severity::None, 0.9)),
                (Phenotype::Unknown, unknown),
            ],
        ),
        (
            TPMT,
            [
                (PoorMetabolizer, rule(Toxic, Severity::Critical, 0.97)),
                (IntermediateMetabolizer, rule(AdjustDosage, Severity::High, 0.9)),
                (NormalMetabolizer, rule(Safe, Severity::None, 0.98)),
                (RapidMetabolizer, rule(Safe, Severity::None, 0.9)),
                (UltrarapidMetabolizer, rule(Safe, Severity::None, 0.9)),
                (Phenotype::Unknown, unknown),
            ],
        ),
        (
            DPYD,
            [
                (PoorMetabolizer, rule(Toxic, Severity::Critical, 0.97)),
                (IntermediateMetabolizer, rule(AdjustDosage, Severity::High, 0.9)),
                (NormalMetabolizer, rule(Safe, Severity::None, 0.98)),
                (RapidMetabolizer, rule(Safe, Severity::None, 0.9)),
                (UltrarapidMetabolizer, rule(Safe, Severity::None, 0.9)),
                (Phenotype::Unknown, unknown),
            ],
        ),
    ];

    genes
        .into_iter()
        .map(|(gene, rules)| (gene, rules.into_iter().collect::<RuleTable>()))
        .collect()
});
