use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use serde_json::Value;
use std::time::Duration;

use crate::error::{FeedbackError, Result};
use crate::gate;
use crate::prompts;
use crate::rate_limit::RateLimiter;
use crate::sanitize::sanitize_answers;
use crate::types::{EngineConfig, OverallFeedback, SectionFeedback};

/// Rate-limit partition used when the caller supplies no identity.
pub const ANONYMOUS_IDENTITY: &str = "anonymous";

/// Feedback orchestrator.
///
/// Runs the full pipeline for both operations: structural validation,
/// sanitization, rate limiting, precondition gate, prompt rendering and a
/// single deadline-bounded call to the completion backend. The only
/// suspension point is the backend call itself.
pub struct Engine {
    config: EngineConfig,
    client: Client<OpenAIConfig>,
    limiter: RateLimiter,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let mut openai_config = OpenAIConfig::new();
        if let Some(base_url) = &config.base_url {
            openai_config = openai_config.with_api_base(base_url);
        }
        if let Some(api_key) = &config.api_key {
            openai_config = openai_config.with_api_key(api_key);
        }
        Self {
            config,
            client: Client::with_config(openai_config),
            limiter: RateLimiter::new(),
        }
    }

    /// Feedback for one worksheet section.
    ///
    /// The section id is validated before anything else, so an unknown
    /// section is always invalid-argument no matter the limiter state.
    /// Rate limiting runs before the precondition gate: spamming requests
    /// with empty answers still consumes the caller's quota.
    pub async fn section_feedback(
        &self,
        section_id: &str,
        raw_answers: Option<&Value>,
        identity: Option<&str>,
    ) -> Result<SectionFeedback> {
        let section = gate::require_section(section_id)?;
        let answers = sanitize_answers(raw_answers);
        self.limiter
            .check_and_record(identity.unwrap_or(ANONYMOUS_IDENTITY))?;
        gate::ensure_section_answered(section, &answers)?;

        tracing::debug!(section = section.id, answered = answers.len(), "building section prompt");
        let prompt = prompts::build_section_prompt(section, &answers);
        let feedback = self
            .complete(
                prompts::SECTION_SYSTEM_PROMPT,
                &prompt,
                self.config.section_max_tokens,
                self.config.section_timeout,
            )
            .await?;

        Ok(SectionFeedback {
            feedback,
            section: section.id.to_string(),
        })
    }

    /// Feedback over the whole worksheet.
    pub async fn overall_feedback(
        &self,
        raw_answers: Option<&Value>,
        identity: Option<&str>,
    ) -> Result<OverallFeedback> {
        if raw_answers.map_or(true, Value::is_null) {
            return Err(FeedbackError::InvalidArgument(
                "回答データがありません".to_string(),
            ));
        }
        let answers = sanitize_answers(raw_answers);
        self.limiter
            .check_and_record(identity.unwrap_or(ANONYMOUS_IDENTITY))?;
        gate::ensure_overall_answered(&answers)?;

        tracing::debug!(answered = answers.len(), "building overall prompt");
        let prompt = prompts::build_overall_prompt(&answers);
        let feedback = self
            .complete(
                prompts::OVERALL_SYSTEM_PROMPT,
                &prompt,
                self.config.overall_max_tokens,
                self.config.overall_timeout,
            )
            .await?;

        Ok(OverallFeedback { feedback })
    }

    /// One completion attempt against the backend, bounded by `deadline`.
    ///
    /// No retries: an upstream failure surfaces to the caller as-is, and on
    /// timeout the in-flight call is dropped.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        deadline: Duration,
    ) -> Result<String> {
        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()?,
            ),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model)
            .messages(messages)
            .temperature(self.config.temperature)
            .max_tokens(max_tokens)
            .build()?;

        let response = tokio::time::timeout(deadline, self.client.chat().create(request))
            .await
            .map_err(|_| {
                tracing::warn!(deadline_secs = deadline.as_secs(), "completion call timed out");
                FeedbackError::DeadlineExceeded
            })??;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                FeedbackError::UnexpectedResponse("completion had no text content".to_string())
            })
    }
}
