//! Polish request/response models

use migaki::{Tone, TokenUsage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the polish endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PolishRequest {
    /// Raw draft or loose ideas to rewrite
    #[schema(
        example = "tell juan i can't make the 5pm meeting because of a dentist appointment, ask him to move it to tomorrow"
    )]
    pub draft: String,
    /// Tone of the rewritten email: formal, empathetic, or persuasive
    #[serde(default)]
    #[schema(value_type = String, example = "formal")]
    pub tone: Tone,
}

/// Response body for the polish endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PolishResponse {
    /// The polished, send-ready email text
    pub email: String,
    /// Model that produced the rewrite
    pub model: String,
    /// Token usage reported by the generation service
    #[schema(value_type = Object)]
    pub usage: TokenUsage,
}
