use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::backend::RecommendationBackend;
use super::error::AdvisorError;
use crate::config::AdvisorConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Sampling parameters sent with every `generateContent` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    generation: GenerationConfig,
}

impl GeminiBackend {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AdvisorError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            generation: GenerationConfig::default(),
        })
    }

    /// Builds a backend from configuration. Fails with `NotConfigured` when no API key is set.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let api_key = config.api_key.as_ref().ok_or(AdvisorError::NotConfigured)?;
        let backend = Self::new(
            api_key.clone(),
            config.base_url.clone(),
            config.model.clone(),
            config.timeout,
        )?;
        Ok(backend.with_generation(GenerationConfig {
            temperature: config.temperature,
            ..GenerationConfig::default()
        }))
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generation(&self) -> GenerationConfig {
        self.generation
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RecommendationBackend for GeminiBackend {
    #[instrument(skip(self, prompt), fields(model = %self.model), level = "debug")]
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: self.generation,
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "received generateContent response");
        extract_text(&body)
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a `generateContent` envelope.
pub(crate) fn extract_text(body: &str) -> Result<String, AdvisorError> {
    let envelope: GenerateContentResponse =
        serde_json::from_str(body).map_err(|_| AdvisorError::MalformedEnvelope)?;

    envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or(AdvisorError::MalformedEnvelope)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
