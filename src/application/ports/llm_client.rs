use async_trait::async_trait;

/// The three turns sent to the question-answering model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantPrompt {
    pub persona: String,
    pub hints: String,
    pub document_and_question: String,
}

impl AssistantPrompt {
    pub fn new(persona: &str, hints: &str, question: &str, document_text: &str) -> Self {
        Self {
            persona: persona.to_string(),
            hints: hints.to_string(),
            document_and_question: format!("Files: {document_text}\n\nQuestion: {question}?"),
        }
    }
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &AssistantPrompt) -> Result<String, LlmClientError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmClientError {
    #[error("rate limited")]
    RateLimited,
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
