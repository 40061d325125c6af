use std::sync::Mutex;

use pdfchat::application::ports::{AssistantPrompt, LlmClient, LlmClientError};

/// Replies with a fixed outcome and remembers every prompt it was sent.
pub struct MockLlmClient {
    outcome: Result<String, LlmClientError>,
    prompts: Mutex<Vec<AssistantPrompt>>,
}

impl MockLlmClient {
    pub fn answering(answer: &str) -> Self {
        Self {
            outcome: Ok(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: LlmClientError) -> Self {
        Self {
            outcome: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<AssistantPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &AssistantPrompt) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.outcome.clone()
    }
}
