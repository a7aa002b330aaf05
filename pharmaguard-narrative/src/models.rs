use serde::{Deserialize, Serialize};

/// Everything the narrator is told about one drug's risk call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeContext {
    pub drug: String,
    pub gene: String,
    pub diplotype: String,
    pub phenotype: String,
    pub risk_label: String,
    pub severity: String,
    /// rsIDs detected for the gene.
    pub variants: Vec<String>,
}

impl NarrativeContext {
    ///
    /// Render the instruction prompt sent to the text-generation service.
    ///
    pub fn prompt(&self) -> String {
        let variants = if self.variants.is_empty() {
            "none detected".to_string()
        } else {
            self.variants.join(", ")
        };

        format!(
            "You are a clinical pharmacogenomics expert.\n\
             \n\
             Patient Pharmacogenomic Data:\n\
             Drug: {drug}\n\
             Primary Gene: {gene}\n\
             Diplotype: {diplotype}\n\
             Phenotype: {phenotype}\n\
             Risk Classification: {risk}\n\
             Severity Level: {severity}\n\
             Detected Variants (rsIDs): {variants}\n\
             \n\
             Instructions:\n\
             1. Write a SINGLE, professional paragraph explaining the clinical implications of this result.\n\
             2. Start by stating the patient's genotype and phenotype.\n\
             3. Explain how this affects the metabolism of the drug.\n\
             4. Mention the specific variants detected (rsIDs) and their effect on enzyme function.\n\
             5. Conclude with the clinical risk assessment ({risk}).\n\
             6. Do NOT use bullet points, headers, or markdown formatting.\n\
             7. Keep it concise (approx. 4-6 sentences).\n",
            drug = self.drug,
            gene = self.gene,
            diplotype = self.diplotype,
            phenotype = self.phenotype,
            risk = self.risk_label,
            severity = self.severity,
            variants = variants,
        )
    }
}

/// Generated explanation attached to a drug's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeExplanation {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biological_mechanism: Option<String>,
    /// rsIDs the explanation refers to.
    pub variant_citations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_impact: Option<String>,
}

impl NarrativeExplanation {
    pub fn from_summary(summary: impl Into<String>, context: &NarrativeContext) -> Self {
        NarrativeExplanation {
            summary: summary.into(),
            biological_mechanism: None,
            variant_citations: context.variants.clone(),
            clinical_impact: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn context() -> NarrativeContext {
        NarrativeContext {
            drug: "CODEINE".to_string(),
            gene: "CYP2D6".to_string(),
            diplotype: "*4/*4".to_string(),
            phenotype: "PM".to_string(),
            risk_label: "Toxic".to_string(),
            severity: "high".to_string(),
            variants: vec!["rs3892097".to_string(), "rs1065852".to_string()],
        }
    }

    #[rstest]
    fn test_prompt_contains_context(context: NarrativeContext) {
        let prompt = context.prompt();
        assert!(prompt.contains("Drug: CODEINE\n"));
        assert!(prompt.contains("Diplotype: *4/*4\n"));
        assert!(prompt.contains("Detected Variants (rsIDs): rs3892097, rs1065852\n"));
        assert!(prompt.contains("clinical risk assessment (Toxic)"));
    }

    #[rstest]
    fn test_prompt_without_variants(mut context: NarrativeContext) {
        context.variants.clear();
        assert!(context.prompt().contains("Detected Variants (rsIDs): none detected"));
    }

    #[rstest]
    fn test_explanation_cites_context_variants(context: NarrativeContext) {
        let explanation = NarrativeExplanation::from_summary("text", &context);
        assert_eq!(explanation.variant_citations, context.variants);

        let json = serde_json::to_value(&explanation).unwrap();
        assert!(json.get("clinical_impact").is_none());
    }
}
