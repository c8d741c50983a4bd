//! Groq chat-completions adapter (hosted inference)

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::prompt::SYSTEM_PROMPT;

use super::types::{Provider, ProviderName};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f64 = 0.7;

/// Adapter for Groq's OpenAI-style chat-completions API
///
/// The API key is read from the environment on every call rather than
/// cached at startup, so configuring it does not require a restart. An
/// unset key means "unconfigured": the adapter declines without a
/// network call.
#[derive(Clone)]
pub struct GroqProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key_env: String,
}

impl std::fmt::Debug for GroqProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key_env", &self.api_key_env)
            .finish()
    }
}

impl GroqProvider {
    /// Create a new Groq adapter. `api_key_env` names the environment
    /// variable holding the credential.
    pub fn new(base_url: String, model: String, api_key_env: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            model,
            api_key_env,
        }
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
    }

    /// Make a single chat-completions request
    async fn complete(&self, api_key: &str, user_text: &str) -> Result<String> {
        let body = serde_json::json!({
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_text },
            ],
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        debug!("Sending chat request to Groq, model={}", self.model);

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Groq")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Groq request failed with status {}", status));
        }

        let reply: CompletionResponse = response
            .json()
            .await
            .context("Failed to parse Groq response")?;

        let choice = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Groq response had no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        let text = content.trim();
        if text.is_empty() {
            return Err(anyhow!("Groq returned an empty completion"));
        }

        Ok(text.to_string())
    }
}

#[async_trait]
impl Provider for GroqProvider {
    fn name(&self) -> ProviderName {
        ProviderName::Hosted
    }

    async fn invoke(&self, user_text: &str) -> Option<String> {
        let Some(api_key) = self.api_key() else {
            debug!("{} is not set, skipping Groq", self.api_key_env);
            return None;
        };

        match self.complete(&api_key, user_text).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Groq adapter failed: {:#}", e);
                None
            }
        }
    }

    async fn healthy(&self) -> bool {
        // Configured means usable; no probe call is made against the
        // hosted API.
        self.api_key().is_some()
    }
}

// ── Groq wire types (OpenAI-compatible) ──

#[derive(Debug, Clone, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}
