use thiserror::Error;

use pharmaguard_narrative::NarrativeError;
use pharmaguard_vcf::ParseError;

/// Problems with the request itself. The whole request is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No VCF file was provided")]
    MissingVcf,

    #[error("No drugs were requested")]
    EmptyDrugList,

    #[error("Unrecognized drug name(s): {}", .0.join(", "))]
    UnrecognizedDrugs(Vec<String>),
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to parse VCF: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ConfigToml(#[from] toml::de::Error),

    #[error("Could not set up narrative client: {0}")]
    Narrator(#[from] NarrativeError),
}

impl PipelineError {
    /// HTTP-style status for callers that expose the pipeline over a network.
    pub fn status_code(&self) -> u16 {
        match self {
            PipelineError::Validation(_) => 400,
            PipelineError::Parse(_) => 422,
            PipelineError::ConfigIo(_)
            | PipelineError::ConfigToml(_)
            | PipelineError::Narrator(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_unrecognized_drugs_message() {
        let err = ValidationError::UnrecognizedDrugs(vec!["ASPIRIN".to_string(), "TYLENOL".to_string()]);
        assert_eq!(err.to_string(), "Unrecognized drug name(s): ASPIRIN, TYLENOL");
    }

    #[rstest]
    #[case(PipelineError::Validation(ValidationError::MissingVcf), 400)]
    #[case(PipelineError::Parse(ParseError::MissingColumns { line: 3, found: 2 }), 422)]
    #[case(PipelineError::Narrator(NarrativeError::NoCredentials), 500)]
    fn test_status_codes(#[case] err: PipelineError, #[case] expected: u16) {
        assert_eq!(err.status_code(), expected);
    }
}
