//! OpenAI Chat Completions adapter
//!
//! Implements the TextGenerator port against OpenAI's chat completions
//! endpoint using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use migaki::{
    ChatMessage, DomainError, GenerationOptions, GenerationResponse, TextGenerator, TokenUsage,
};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Text generator backed by OpenAI chat completions
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    /// Creates a new generator using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model name if needed.
    #[allow(dead_code)]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<GenerationResponse, DomainError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|err| DomainError::ExternalService(format!("Request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_api_error(status, body));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| DomainError::ExternalService(format!("Failed to parse response: {err}")))?;

        extract_response(payload)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Helper Functions
// ============================================

fn extract_response(payload: ChatCompletionResponse) -> Result<GenerationResponse, DomainError> {
    let ChatCompletionResponse {
        model,
        choices,
        usage,
    } = payload;

    let content = choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| DomainError::ExternalService("No content returned from model".to_string()))?;

    Ok(GenerationResponse {
        content,
        model,
        usage: TokenUsage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        },
    })
}

fn map_api_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::ExternalService(format!("OpenAI API error ({}): {}", status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use migaki::{build_messages, Tone};

    #[test]
    fn test_request_serializes_wire_format() {
        let messages = build_messages("move the meeting", Tone::Formal);
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            max_tokens: Some(500),
            temperature: Some(0.7),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 500);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "move the meeting");
    }

    #[test]
    fn test_extract_response_takes_first_choice() {
        let payload = ChatCompletionResponse {
            model: "gpt-4o-mini".to_string(),
            choices: vec![Choice {
                message: ResponseMessage {
                    content: Some("Subject: Meeting".to_string()),
                },
            }],
            usage: Usage {
                prompt_tokens: 80,
                completion_tokens: 40,
                total_tokens: 120,
            },
        };

        let response = extract_response(payload).unwrap();
        assert_eq!(response.content, "Subject: Meeting");
        assert_eq!(response.usage.total_tokens, 120);
    }

    #[test]
    fn test_extract_response_without_content_is_an_error() {
        let payload = ChatCompletionResponse {
            model: "gpt-4o-mini".to_string(),
            choices: vec![],
            usage: Usage::default(),
        };

        assert!(matches!(
            extract_response(payload),
            Err(DomainError::ExternalService(_))
        ));
    }

    #[test]
    fn test_api_error_uses_upstream_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided"}}"#.to_string();
        let err = map_api_error(StatusCode::UNAUTHORIZED, body);

        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Incorrect API key provided"));
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = map_api_error(StatusCode::BAD_GATEWAY, "upstream unavailable".to_string());
        assert!(err.to_string().contains("upstream unavailable"));
    }
}
