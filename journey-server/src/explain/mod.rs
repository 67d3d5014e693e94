//! Human-readable journey explanations.
//!
//! Every explanation starts from a summary built from the journey data
//! alone. When an Ollama server is configured and has the model, its
//! analysis is appended.

mod ollama;
mod summary;

pub use ollama::{OllamaClient, OllamaConfig, OllamaError};
pub use summary::{JourneySummary, analysis_prompt, basic_explanation};

use tracing::warn;

use crate::domain::Journey;

/// A generated explanation.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Markdown text
    pub text: String,
    /// Whether the language model contributed
    pub ai_used: bool,
}

/// Builds explanations, optionally enriched by a language model.
#[derive(Debug, Clone, Default)]
pub struct Explainer {
    ollama: Option<OllamaClient>,
}

impl Explainer {
    pub fn new(ollama: Option<OllamaClient>) -> Self {
        Self { ollama }
    }

    /// The language model client, if configured.
    pub fn ollama(&self) -> Option<&OllamaClient> {
        self.ollama.as_ref()
    }

    /// Explain a journey.
    pub async fn explain(&self, journey: &Journey, from: &str, to: &str) -> Explanation {
        let basic = basic_explanation(journey, from, to);

        if let Some(analysis) = self.analysis(journey, from, to).await {
            return Explanation {
                text: format!("{basic}\n\n---\n\n**AI Analysis:**\n\n{analysis}"),
                ai_used: true,
            };
        }

        Explanation {
            text: format!("{basic}\n\n*Note: AI analysis is currently unavailable.*"),
            ai_used: false,
        }
    }

    async fn analysis(&self, journey: &Journey, from: &str, to: &str) -> Option<String> {
        let ollama = self.ollama.as_ref()?;
        if !ollama.available().await {
            return None;
        }

        match ollama.generate(&analysis_prompt(journey, from, to)).await {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "AI analysis failed");
                None
            }
        }
    }
}
