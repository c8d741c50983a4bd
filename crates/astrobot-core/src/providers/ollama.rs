//! Ollama generate-API adapter (local inference)

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::prompt::build_prompt;

use super::types::{Provider, ProviderName};

/// Upper bound on a single generate call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Upper bound on the reachability probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Adapter for a locally running Ollama instance
#[derive(Clone)]
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OllamaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaProvider")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl OllamaProvider {
    /// Create a new Ollama adapter
    pub fn new(base_url: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            model,
        }
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Make a single non-streaming generate request
    async fn generate(&self, user_text: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: self.model.clone(),
            prompt: build_prompt(user_text),
            stream: false,
        };

        debug!("Sending generate request to Ollama at {}", url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Ollama")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Ollama request failed with status {}", status));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        let text = reply.response.trim();
        if text.is_empty() {
            return Err(anyhow!("Ollama returned an empty response"));
        }

        Ok(text.to_string())
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    fn name(&self) -> ProviderName {
        ProviderName::Local
    }

    async fn invoke(&self, user_text: &str) -> Option<String> {
        match self.generate(user_text).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Ollama adapter failed: {:#}", e);
                None
            }
        }
    }

    async fn healthy(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self
            .client
            .get(&url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!("Ollama probe failed: {}", e);
                false
            }
        }
    }
}

// ── Ollama wire types ──

#[derive(Debug, Clone, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = OllamaProvider::new(
            "http://localhost:11434".to_string(),
            "llama2".to_string(),
        );
        assert_eq!(provider.base_url, "http://localhost:11434");
        assert_eq!(provider.model(), "llama2");
        assert_eq!(provider.name(), ProviderName::Local);
    }

    #[test]
    fn test_generate_request_serialization() {
        let body = GenerateRequest {
            model: "llama2".to_string(),
            prompt: "hello".to_string(),
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama2");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_generate_response_missing_field() {
        // A body without the text field parses to an empty string, which
        // the adapter then treats as a failed call.
        let reply: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(reply.response.is_empty());
    }

    #[test]
    fn test_generate_response_parse() {
        let reply: GenerateResponse =
            serde_json::from_str(r#"{"response": "  Mars is red.  "}"#).unwrap();
        assert_eq!(reply.response.trim(), "Mars is red.");
    }

    #[tokio::test]
    async fn test_invoke_unreachable_returns_none() {
        // Nothing listens on this port; the failure must surface as None,
        // not as an error.
        let provider = OllamaProvider::new(
            "http://127.0.0.1:9".to_string(),
            "llama2".to_string(),
        );
        assert!(provider.invoke("hello").await.is_none());
    }

    #[tokio::test]
    async fn test_healthy_unreachable_is_false() {
        let provider = OllamaProvider::new(
            "http://127.0.0.1:9".to_string(),
            "llama2".to_string(),
        );
        assert!(!provider.healthy().await);
    }

    #[test]
    fn test_provider_debug() {
        let provider = OllamaProvider::new(
            "http://localhost:11434".to_string(),
            "llama2".to_string(),
        );
        let debug_output = format!("{:?}", provider);
        assert!(debug_output.contains("OllamaProvider"));
        assert!(debug_output.contains("llama2"));
    }
}
