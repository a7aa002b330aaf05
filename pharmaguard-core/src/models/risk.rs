use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::models::drug::Drug;

/// Qualitative clinical risk for a drug given a phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Safe,
    #[serde(rename = "Adjust Dosage")]
    AdjustDosage,
    Toxic,
    Ineffective,
    Unknown,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Safe => "Safe",
            RiskLabel::AdjustDosage => "Adjust Dosage",
            RiskLabel::Toxic => "Toxic",
            RiskLabel::Ineffective => "Ineffective",
            RiskLabel::Unknown => "Unknown",
        }
    }
}

impl Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the risk rule table: label, severity and confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskRule {
    pub risk_label: RiskLabel,
    pub severity: Severity,
    pub confidence_score: f64,
}

impl RiskRule {
    /// Returned whenever a gene or phenotype has no rule.
    pub const UNKNOWN: RiskRule = RiskRule::new(RiskLabel::Unknown, Severity::Low, 0.5);

    pub const fn new(risk_label: RiskLabel, severity: Severity, confidence_score: f64) -> Self {
        RiskRule {
            risk_label,
            severity,
            confidence_score,
        }
    }
}

/// Risk classification for a single drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub drug: Drug,
    pub risk_label: RiskLabel,
    pub severity: Severity,
    /// Always within `[0, 1]`.
    pub confidence_score: f64,
}

impl RiskAssessment {
    pub fn from_rule(drug: Drug, rule: RiskRule) -> Self {
        RiskAssessment {
            drug,
            risk_label: rule.risk_label,
            severity: rule.severity,
            confidence_score: rule.confidence_score,
        }
    }

    pub fn rule(&self) -> RiskRule {
        RiskRule::new(self.risk_label, self.severity, self.confidence_score)
    }
}
