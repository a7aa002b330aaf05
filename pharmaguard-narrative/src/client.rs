use std::time::Duration;

use log::{debug, info};
use serde::Deserialize;
use serde_json::json;
use ureq::{Agent, Error as UreqError};

use crate::config::{Credential, NarrativeConfig};
use crate::consts::{API_KEY_HEADER, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::error::{NarrativeError, Result};
use crate::fallback::try_credentials;
use crate::models::{NarrativeContext, NarrativeExplanation};

/// Anything that can turn a risk call into a narrative explanation.
pub trait Narrator: Send + Sync {
    fn explain(&self, context: &NarrativeContext) -> Result<NarrativeExplanation>;
}

///
/// GeminiNarratorBuilder, collects model, endpoint and credentials.
///
#[derive(Debug, Clone)]
pub struct GeminiNarratorBuilder {
    model: String,
    base_url: String,
    timeout_secs: u64,
    credentials: Vec<Credential>,
}

impl Default for GeminiNarratorBuilder {
    fn default() -> Self {
        GeminiNarratorBuilder {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            credentials: Vec::new(),
        }
    }
}

impl GeminiNarratorBuilder {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Append a key; keys are tried in the order they were added.
    pub fn with_credential(mut self, api_key: impl Into<String>) -> Self {
        self.credentials.push(Credential::new(api_key));
        self
    }

    pub fn with_credentials(mut self, credentials: impl IntoIterator<Item = Credential>) -> Self {
        self.credentials.extend(credentials);
        self
    }

    pub fn finish(self) -> Result<GeminiNarrator> {
        if self.credentials.is_empty() {
            return Err(NarrativeError::NoCredentials);
        }

        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(self.timeout_secs)))
            .build()
            .into();

        info!(
            "Narrative client ready: model {}, {} credential(s)",
            self.model,
            self.credentials.len()
        );

        Ok(GeminiNarrator {
            agent,
            model: self.model,
            base_url: self.base_url,
            credentials: self.credentials,
        })
    }
}

///
/// GeminiNarrator struct, calls the `generateContent` endpoint with
/// ordered credential fallback.
///
pub struct GeminiNarrator {
    agent: Agent,
    model: String,
    base_url: String,
    credentials: Vec<Credential>,
}

impl GeminiNarrator {
    pub fn builder() -> GeminiNarratorBuilder {
        GeminiNarratorBuilder::default()
    }

    pub fn from_config(config: &NarrativeConfig) -> Result<Self> {
        Self::builder()
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout_secs(config.timeout_secs)
            .with_credentials(config.credentials.iter().cloned())
            .finish()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, credential: &Credential) -> String {
        let base = credential.base_url.as_deref().unwrap_or(&self.base_url);
        format!(
            "{}/models/{}:generateContent",
            base.trim_end_matches('/'),
            self.model
        )
    }

    /// One request with one key; returns the generated text.
    fn generate(&self, credential: &Credential, prompt: &str) -> Result<String> {
        let url = self.endpoint(credential);
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] }).to_string();
        debug!("POST {}", url);

        let mut response = match self
            .agent
            .post(url.as_str())
            .header(API_KEY_HEADER, credential.api_key.as_str())
            .header("Content-Type", "application/json")
            .send(body.as_str())
        {
            Ok(resp) => resp,
            Err(UreqError::StatusCode(code)) => return Err(NarrativeError::Status { url, code }),
            Err(e) => {
                return Err(NarrativeError::Transport {
                    url,
                    message: e.to_string(),
                });
            }
        };

        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| NarrativeError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        parse_generate_content(&text)
    }
}

impl Narrator for GeminiNarrator {
    fn explain(&self, context: &NarrativeContext) -> Result<NarrativeExplanation> {
        let prompt = context.prompt();
        let summary = try_credentials(&self.credentials, |credential| {
            self.generate(credential, &prompt)
        })?;
        Ok(NarrativeExplanation::from_summary(summary, context))
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Concatenated text parts of the first candidate.
pub(crate) fn parse_generate_content(body: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| NarrativeError::InvalidResponse(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(NarrativeError::EmptyResponse);
    }
    Ok(text.to_string())
}
