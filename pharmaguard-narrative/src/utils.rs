//! Reading narrative settings from the environment.

use std::env;

use crate::config::{Credential, NarrativeConfig};
use crate::consts::{GEMINI_API_KEY_ENV, GEMINI_API_KEYS_ENV, GEMINI_MODEL_ENV};

///
/// Ordered credentials from the `GEMINI_API_KEYS` list and the single
/// `GEMINI_API_KEY`, in that order. Blank and repeated keys are skipped.
///
pub fn credentials_from_values(keys: Option<&str>, key: Option<&str>) -> Vec<Credential> {
    let mut credentials: Vec<Credential> = Vec::new();

    let candidates = keys
        .into_iter()
        .flat_map(|list| list.split(','))
        .chain(key);

    for candidate in candidates.map(str::trim).filter(|k| !k.is_empty()) {
        if !credentials.iter().any(|c| c.api_key == candidate) {
            credentials.push(Credential::new(candidate));
        }
    }

    credentials
}

/// Credentials found in the environment.
pub fn credentials_from_env() -> Vec<Credential> {
    let keys = env::var(GEMINI_API_KEYS_ENV).ok();
    let key = env::var(GEMINI_API_KEY_ENV).ok();
    credentials_from_values(keys.as_deref(), key.as_deref())
}

///
/// Overlay environment settings onto a config: environment credentials are
/// appended after the configured ones, and `GEMINI_MODEL` replaces the model.
///
pub fn apply_env(config: &mut NarrativeConfig) {
    for credential in credentials_from_env() {
        if !config.credentials.contains(&credential) {
            config.credentials.push(credential);
        }
    }
    if let Ok(model) = env::var(GEMINI_MODEL_ENV) {
        if !model.trim().is_empty() {
            config.model = model.trim().to_string();
        }
    }
}

/// Default config with the environment applied.
pub fn config_from_env() -> NarrativeConfig {
    let mut config = NarrativeConfig::default();
    apply_env(&mut config);
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn keys(credentials: &[Credential]) -> Vec<&str> {
        credentials.iter().map(|c| c.api_key.as_str()).collect()
    }

    #[rstest]
    #[case(Some("a,b"), Some("c"), vec!["a", "b", "c"])]
    #[case(Some(" a , ,b "), None, vec!["a", "b"])]
    #[case(None, Some("solo"), vec!["solo"])]
    #[case(Some("a,b"), Some("a"), vec!["a", "b"])]
    #[case(Some(""), Some("  "), vec![])]
    #[case(None, None, vec![])]
    fn test_credentials_from_values(
        #[case] list: Option<&str>,
        #[case] single: Option<&str>,
        #[case] expected: Vec<&str>,
    ) {
        let credentials = credentials_from_values(list, single);
        assert_eq!(keys(&credentials), expected);
    }
}
