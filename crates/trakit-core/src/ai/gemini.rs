//! Gemini backend implementation
//!
//! HTTP client for the Gemini generateContent API. Categorization uses the
//! embedded prompt template; advice sends the rendered financial context as
//! the user turn with the persona prompt as the system instruction.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::AdvisorContext;
use crate::error::{Error, Result};
use crate::models::Category;
use crate::prompts::{render, PromptId};

use super::parsing::parse_category;
use super::AdvisorBackend;

const DEFAULT_HOST: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini backend
#[derive(Clone)]
pub struct GeminiBackend {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    /// Create a new Gemini backend
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_host(DEFAULT_HOST, api_key, model)
    }

    /// Create with a custom API host (for testing against a local stub)
    pub fn with_host(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Create a new instance with a different model
    pub fn with_model(&self, model: &str) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok()?;
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let host = std::env::var("GEMINI_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Some(Self::with_host(&host, &api_key, &model))
    }

    /// One generateContent round-trip, returning the first candidate's text
    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: system.map(|text| Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }),
        };

        debug!(model = %self.model, "Sending Gemini request");

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| Error::Advisor("Empty response from Gemini".into()))
    }
}

/// Request to the generateContent API
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response from the generateContent API
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[async_trait]
impl AdvisorBackend for GeminiBackend {
    async fn categorize(&self, description: &str) -> Result<Category> {
        let prompt = render(
            PromptId::Categorize.content(),
            &[("description", description)],
        );
        let response = self.generate(&prompt, None).await?;
        Ok(parse_category(&response))
    }

    async fn advise(&self, context: &AdvisorContext, message: &str) -> Result<String> {
        let prompt = context.render(message);
        self.generate(&prompt, Some(PromptId::AdviseSystem.content()))
            .await
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/v1beta/models?key={}", self.base_url, self.api_key);
        match self.http_client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_construction() {
        let backend = GeminiBackend::new("test-key", "gemini-2.5-flash");
        assert_eq!(backend.model(), "gemini-2.5-flash");
        assert_eq!(backend.host(), DEFAULT_HOST);
    }

    #[test]
    fn test_with_host_trims_trailing_slash() {
        let backend = GeminiBackend::with_host("http://localhost:9999/", "k", "m");
        assert_eq!(backend.host(), "http://localhost:9999");
    }

    #[test]
    fn test_with_model_override() {
        let backend = GeminiBackend::new("k", "gemini-2.5-flash").with_model("gemini-2.5-pro");
        assert_eq!(backend.model(), "gemini-2.5-pro");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Food"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.candidates[0].content.parts[0].text, "Food");
    }

    #[test]
    fn test_empty_response_deserialization() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
