use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pharmaguard_narrative::NarrativeConfig;

use crate::errors::PipelineError;

/// Settings injected into [`Pipeline::from_config`](crate::Pipeline::from_config).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PipelineConfig {
    #[serde(default)]
    pub narrative: NarrativeConfig,
}

impl TryFrom<&Path> for PipelineConfig {
    type Error = PipelineError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmaguard_narrative::Credential;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[rstest]
    fn test_try_from_toml() {
        let file = write_config(
            r#"
            [narrative]
            model = "gemini-test"
            timeout_secs = 5

            [[narrative.credentials]]
            api_key = "primary"

            [[narrative.credentials]]
            api_key = "backup"
            base_url = "https://backup.example.org/v1beta"
            "#,
        );
        let config = PipelineConfig::try_from(file.path()).unwrap();

        assert!(config.narrative.enabled);
        assert_eq!(config.narrative.model, "gemini-test");
        assert_eq!(config.narrative.timeout_secs, 5);
        assert_eq!(config.narrative.credentials.len(), 2);
        assert_eq!(config.narrative.credentials[0], Credential::new("primary"));
    }

    #[rstest]
    fn test_empty_file_is_default() {
        let file = write_config("");
        let config = PipelineConfig::try_from(file.path()).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[rstest]
    fn test_missing_file() {
        let result = PipelineConfig::try_from(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(PipelineError::ConfigIo(_))));
    }

    #[rstest]
    fn test_bad_toml() {
        let file = write_config("[narrative\nenabled = maybe");
        let result = PipelineConfig::try_from(file.path());
        assert!(matches!(result, Err(PipelineError::ConfigToml(_))));
    }
}
