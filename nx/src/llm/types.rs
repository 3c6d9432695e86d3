//! LLM request/response types
//!
//! Provider-agnostic shapes for one text-generation call. The Gemini client
//! translates these to and from the `generateContent` wire format.

use tracing::debug;

/// A completion request - everything needed for one LLM call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt (rendered from the Handlebars persona template)
    pub system_prompt: String,

    /// Conversation turns (the assistant sends exactly one user turn)
    pub messages: Vec<Message>,

    /// Sampling temperature, sent as-is on the wire
    pub temperature: f64,
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        debug!("Message::user: called");
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// Message role
///
/// Requests carry a single user turn; replies are never sent back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
}

impl Role {
    /// Role name as Gemini expects it
    pub fn as_gemini(&self) -> &'static str {
        match self {
            Role::User => "user",
        }
    }
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text content (if any)
    pub content: Option<String>,

    /// Why the model stopped
    pub finish_reason: FinishReason,

    /// Token usage reported by the provider
    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// Convenience constructor for a plain text reply
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            finish_reason: FinishReason::Stop,
            usage: TokenUsage::default(),
        }
    }
}

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other(String),
}

impl FinishReason {
    /// Parse from a Gemini `finishReason` string
    pub fn from_gemini(s: &str) -> Self {
        debug!(%s, "FinishReason::from_gemini: called");
        match s {
            "STOP" => FinishReason::Stop,
            "MAX_TOKENS" => FinishReason::MaxTokens,
            "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" => FinishReason::Safety,
            other => {
                debug!(%other, "FinishReason::from_gemini: unrecognized reason");
                FinishReason::Other(other.to_string())
            }
        }
    }
}

/// Token usage as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hola");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text, "Hola");
    }

    #[test]
    fn test_role_as_gemini() {
        assert_eq!(Role::User.as_gemini(), "user");
    }

    #[test]
    fn test_finish_reason_from_gemini() {
        assert_eq!(FinishReason::from_gemini("STOP"), FinishReason::Stop);
        assert_eq!(FinishReason::from_gemini("MAX_TOKENS"), FinishReason::MaxTokens);
        assert_eq!(FinishReason::from_gemini("SAFETY"), FinishReason::Safety);
        assert_eq!(FinishReason::from_gemini("RECITATION"), FinishReason::Safety);
        assert_eq!(
            FinishReason::from_gemini("MALFORMED_FUNCTION_CALL"),
            FinishReason::Other("MALFORMED_FUNCTION_CALL".to_string())
        );
    }

    #[test]
    fn test_completion_response_text() {
        let resp = CompletionResponse::text("Rango #1");
        assert_eq!(resp.content.as_deref(), Some("Rango #1"));
        assert_eq!(resp.finish_reason, FinishReason::Stop);
        assert_eq!(resp.usage, TokenUsage::default());
    }
}
