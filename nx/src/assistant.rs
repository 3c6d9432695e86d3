//! Nexus Core assistant
//!
//! Sends one user question, together with a persona prompt describing the
//! current competition state, to the configured LLM and hands back the
//! reply. Failures never reach the user: [`Assistant::reply`] logs them and
//! answers with [`FALLBACK_REPLY`].

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::LlmConfig;
use crate::llm::{CompletionRequest, LlmClient, LlmError, Message, create_client};
use crate::prompts::PromptLoader;
use crate::state::DomainState;

/// Sampling temperature for every assistant call
pub const TEMPERATURE: f64 = 0.7;

/// What the user sees whenever the assistant cannot answer
pub const FALLBACK_REPLY: &str = "Nexus Core está recalibrando sus sistemas... Por favor, inténtalo más tarde.";

/// Errors that can occur while asking the assistant
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("LLM request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Model returned an empty reply")]
    EmptyResponse,

    #[error("Failed to build system prompt: {0}")]
    Prompt(String),
}

/// The conversational assistant
pub struct Assistant {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
}

impl Assistant {
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader) -> Self {
        Self { llm, prompts }
    }

    /// Build the assistant with the provider named in config
    pub fn from_config(config: &LlmConfig, prompts: PromptLoader) -> Result<Self, LlmError> {
        Ok(Self::new(create_client(config)?, prompts))
    }

    /// Ask one question about the given state snapshot
    ///
    /// The utterance is forwarded as-is. Exactly one request is issued; the
    /// generated text is returned verbatim.
    pub async fn ask(&self, utterance: &str, snapshot: &DomainState) -> Result<String, AssistantError> {
        debug!(utterance_len = utterance.len(), model = %self.llm.model(), "ask: called");
        let system_prompt = self
            .prompts
            .system_preamble(snapshot)
            .map_err(|e| AssistantError::Prompt(e.to_string()))?;

        let request = CompletionRequest {
            system_prompt,
            messages: vec![Message::user(utterance)],
            temperature: TEMPERATURE,
        };

        let response = self.llm.complete(request).await?;
        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            finish_reason = ?response.finish_reason,
            "ask: completed"
        );

        match response.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(AssistantError::EmptyResponse),
        }
    }

    /// Ask, and substitute [`FALLBACK_REPLY`] for any failure
    ///
    /// The underlying error goes to the log only.
    pub async fn reply(&self, utterance: &str, snapshot: &DomainState) -> String {
        match self.ask(utterance, snapshot).await {
            Ok(text) => {
                info!(reply_len = text.len(), "reply: assistant answered");
                text
            }
            Err(e) => {
                error!(error = %e, "Nexus Core request failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
