//! Polish Application Service (Use Case)
//!
//! Orchestrates a single draft-to-email rewrite: validate the draft,
//! build the instruction, make one generation call.

use std::sync::Arc;

use migaki::{build_messages, DomainError, GenerationOptions, GenerationResponse, TextGenerator, Tone};

/// Application service for polishing drafts
pub struct PolishService<G: TextGenerator> {
    generator: Arc<G>,
}

impl<G: TextGenerator> PolishService<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Rewrite a draft into a professional email in the requested tone.
    ///
    /// An empty draft is rejected before any call to the generation
    /// service. The generated text is returned verbatim.
    pub async fn polish(
        &self,
        draft: &str,
        tone: Tone,
    ) -> Result<GenerationResponse, DomainError> {
        let draft = draft.trim();
        if draft.is_empty() {
            return Err(DomainError::Validation(
                "Draft must not be empty".to_string(),
            ));
        }

        let messages = build_messages(draft, tone);
        let response = self
            .generator
            .generate(&messages, &GenerationOptions::default())
            .await?;

        tracing::info!(
            "Polished draft ({} chars, tone: {}) - {} tokens",
            draft.len(),
            tone,
            response.usage.total_tokens
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use migaki::{ChatMessage, MessageRole, TokenUsage};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingGenerator {
        calls: Mutex<Vec<(Vec<ChatMessage>, GenerationOptions)>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(
            &self,
            messages: &[ChatMessage],
            options: &GenerationOptions,
        ) -> Result<GenerationResponse, DomainError> {
            self.calls
                .lock()
                .unwrap()
                .push((messages.to_vec(), options.clone()));

            if let Some(detail) = &self.fail_with {
                return Err(DomainError::ExternalService(detail.clone()));
            }

            Ok(GenerationResponse {
                content: "Subject: Rescheduling".to_string(),
                model: "test-model".to_string(),
                usage: TokenUsage::default(),
            })
        }

        fn model_id(&self) -> &str {
            "test-model"
        }
    }

    fn service(
        generator: RecordingGenerator,
    ) -> (PolishService<RecordingGenerator>, Arc<RecordingGenerator>) {
        let generator = Arc::new(generator);
        (PolishService::new(generator.clone()), generator)
    }

    #[tokio::test]
    async fn test_empty_draft_is_rejected_before_any_call() {
        let (service, generator) = service(RecordingGenerator::default());

        let err = service.polish("   \n", Tone::Formal).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(generator.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_polish_makes_exactly_one_call_per_tone() {
        let (service, generator) = service(RecordingGenerator::default());

        for tone in Tone::ALL {
            service
                .polish("tell juan i can't make the 5pm meeting", tone)
                .await
                .unwrap();
        }

        let calls = generator.calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        for (messages, options) in calls.iter() {
            assert_eq!(options.max_tokens, Some(500));
            assert_eq!(options.temperature, Some(0.7));
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role, MessageRole::System);
            assert_eq!(messages[1].role, MessageRole::User);
            assert_eq!(messages[1].content, "tell juan i can't make the 5pm meeting");
        }
    }

    #[tokio::test]
    async fn test_draft_is_trimmed_before_sending() {
        let (service, generator) = service(RecordingGenerator::default());

        service
            .polish("  ask for a new quote \n", Tone::Persuasive)
            .await
            .unwrap();

        let calls = generator.calls.lock().unwrap();
        assert_eq!(calls[0].0[1].content, "ask for a new quote");
    }

    #[tokio::test]
    async fn test_generator_failure_surfaces_the_detail() {
        let (service, _) = service(RecordingGenerator {
            fail_with: Some("quota exceeded".to_string()),
            ..Default::default()
        });

        let err = service.polish("hi", Tone::Empathetic).await.unwrap_err();

        assert!(matches!(err, DomainError::ExternalService(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }
}
