//! Text Generation Port
//!
//! Abstract interface for the external text-generation service the
//! rewrite is delegated to. Adapters implement this trait against a
//! concrete provider API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Role of a message in a chat exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a chat exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Options for a single generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: Some(500),
            temperature: Some(0.7),
        }
    }
}

/// Response from a generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text content, returned verbatim to the caller
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: TokenUsage,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Text generator interface
///
/// Abstracts the generation service behind a trait so the application
/// layer can be exercised against a mock implementation.
///
/// # Example
///
/// ```rust,ignore
/// use migaki::ports::TextGenerator;
///
/// struct OpenAiGenerator { /* ... */ }
///
/// #[async_trait]
/// impl TextGenerator for OpenAiGenerator {
///     async fn generate(&self, messages: &[ChatMessage], options: &GenerationOptions)
///         -> Result<GenerationResponse, DomainError> {
///         // Call the chat completions API
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion from messages
    async fn generate(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<GenerationResponse, DomainError>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
