//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless LLM client - each call is independent
///
/// The assistant keeps no server-side conversation: every question is sent
/// as a single user turn with a freshly rendered system prompt, so the
/// client never needs to hold state between calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request and wait for the full reply
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Model identifier this client sends requests to
    fn model(&self) -> &str;
}
