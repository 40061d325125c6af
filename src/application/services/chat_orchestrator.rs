use std::sync::Arc;

use crate::application::ports::{AssistantPrompt, LlmClient, LlmClientError};

pub const DEFAULT_PERSONA: &str = "You are a HR Specialist.";

/// Builds the assistant prompt from already-sanitized input and classifies
/// whatever the model service does with it.
pub struct ChatOrchestrator<L: LlmClient> {
    llm_client: Arc<L>,
    persona: String,
}

impl<L: LlmClient> ChatOrchestrator<L> {
    pub fn new(llm_client: Arc<L>, persona: String) -> Self {
        Self {
            llm_client,
            persona,
        }
    }

    pub async fn answer(
        &self,
        hints: &str,
        question: &str,
        document_text: &str,
    ) -> Result<String, ChatError> {
        if hints.trim().is_empty() {
            return Err(ChatError::MissingInput("hints"));
        }
        if question.trim().is_empty() {
            return Err(ChatError::MissingInput("question"));
        }
        if document_text.trim().is_empty() {
            return Err(ChatError::MissingInput("document text"));
        }

        let prompt = AssistantPrompt::new(&self.persona, hints, question, document_text);

        let started = std::time::Instant::now();
        let answer = self.llm_client.complete(&prompt).await?;
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            answer_chars = answer.chars().count(),
            "Assistant answered"
        );

        Ok(answer)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("{0} is required")]
    MissingInput(&'static str),
    #[error("rate limit exceeded")]
    RateLimited,
    #[error("assistant service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("assistant failed: {0}")]
    UnknownFailure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatErrorKind {
    MissingInput,
    RateLimited,
    ServiceUnavailable,
    UnknownFailure,
}

impl ChatError {
    pub fn kind(&self) -> ChatErrorKind {
        match self {
            Self::MissingInput(_) => ChatErrorKind::MissingInput,
            Self::RateLimited => ChatErrorKind::RateLimited,
            Self::ServiceUnavailable(_) => ChatErrorKind::ServiceUnavailable,
            Self::UnknownFailure(_) => ChatErrorKind::UnknownFailure,
        }
    }
}

impl From<LlmClientError> for ChatError {
    fn from(error: LlmClientError) -> Self {
        match error {
            LlmClientError::RateLimited => Self::RateLimited,
            LlmClientError::ServiceUnavailable(cause) => Self::ServiceUnavailable(cause),
            other => Self::UnknownFailure(other.to_string()),
        }
    }
}
