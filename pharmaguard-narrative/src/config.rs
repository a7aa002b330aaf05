use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// One API key, optionally bound to its own endpoint.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Credential {
    pub api_key: String,
    /// Overrides [`NarrativeConfig::base_url`] for this key only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Credential {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

// keys never end up in logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// The `[narrative]` table of the pipeline configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NarrativeConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Tried in order until one succeeds.
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        NarrativeConfig {
            enabled: default_enabled(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            credentials: Vec::new(),
        }
    }
}

impl NarrativeConfig {
    /// Enabled and has at least one credential to try.
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.credentials.is_empty()
    }
}
