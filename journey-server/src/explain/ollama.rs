//! Ollama HTTP client.
//!
//! Talks to a locally running Ollama server to generate free-text journey
//! analysis. The server is optional: callers treat any failure as "AI
//! analysis unavailable".

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default Ollama server address.
const DEFAULT_HOST: &str = "http://localhost:11434";

/// Default model name.
const DEFAULT_MODEL: &str = "llama2:7b";

/// Errors from the Ollama client.
#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Ollama API error {status}: {message}")]
    Api { status: u16, message: String },
}

/// Configuration for the Ollama client.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Server base URL
    pub host: String,
    /// Model used for generation
    pub model: String,
    /// Timeout for generation requests in seconds
    pub timeout_secs: u64,
    /// Timeout for the availability probe in seconds
    pub probe_timeout_secs: u64,
}

impl OllamaConfig {
    pub fn new(host: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            model: model.into(),
            timeout_secs: 45,
            probe_timeout_secs: 5,
        }
    }

    /// Set the generation timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_MODEL)
    }
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Ollama API client.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    host: String,
    model: String,
    probe_timeout: Duration,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self, OllamaError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            host: config.host.trim_end_matches('/').to_string(),
            model: config.model,
            probe_timeout: Duration::from_secs(config.probe_timeout_secs),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Names of the models installed on the server.
    pub async fn models(&self) -> Result<Vec<String>, OllamaError> {
        let response = self
            .http
            .get(format!("{}/api/tags", self.host))
            .timeout(self.probe_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let tags: TagsResponse = response.json().await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Whether `models` includes the configured model.
    ///
    /// Matches on substring so `llama2:7b` is found in `llama2:7b-chat`.
    pub fn has_model(&self, models: &[String]) -> bool {
        models.iter().any(|m| m.contains(&self.model))
    }

    /// Whether the server is reachable and has the configured model.
    pub async fn available(&self) -> bool {
        match self.models().await {
            Ok(models) => {
                let found = self.has_model(&models);
                if !found {
                    warn!(model = %self.model, ?models, "Ollama model not installed");
                }
                found
            }
            Err(e) => {
                debug!(host = %self.host, error = %e, "Ollama not available");
                false
            }
        }
    }

    /// Generate a completion for `prompt`. Single attempt.
    pub async fn generate(&self, prompt: &str) -> Result<String, OllamaError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: 0.3,
                num_predict: 300,
            },
        };

        let response = self
            .http
            .post(format!("{}/api/generate", self.host))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let generated: GenerateResponse = response.json().await?;
        Ok(generated.response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = OllamaConfig::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.probe_timeout_secs, 5);
    }

    #[test]
    fn client_strips_trailing_slash() {
        let client =
            OllamaClient::new(OllamaConfig::new("http://localhost:11434/", "mistral")).unwrap();
        assert_eq!(client.host(), "http://localhost:11434");
        assert_eq!(client.model(), "mistral");
    }

    #[test]
    fn model_matching() {
        let client = OllamaClient::new(OllamaConfig::new("http://localhost:11434", "llama2:7b")).unwrap();

        assert!(client.has_model(&["mistral".into(), "llama2:7b".into()]));
        assert!(client.has_model(&["llama2:7b-chat".into()]));
        assert!(!client.has_model(&["llama2:13b".into()]));
        assert!(!client.has_model(&[]));
    }

    #[test]
    fn generate_request_shape() {
        let request = GenerateRequest {
            model: "llama2:7b",
            prompt: "hi",
            stream: false,
            options: GenerateOptions {
                temperature: 0.3,
                num_predict: 300,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama2:7b");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["num_predict"], 300);
    }

    #[tokio::test]
    async fn unreachable_server_is_unavailable() {
        // Port 9 (discard) is not an HTTP server.
        let client = OllamaClient::new(OllamaConfig::new("http://127.0.0.1:9", "llama2")).unwrap();
        assert!(!client.available().await);
    }
}
