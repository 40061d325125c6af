use std::sync::Arc;

use crate::application::ports::{
    ConversationRepository, DocumentRepository, LlmClient, RepositoryError,
};
use crate::domain::{ChatTurn, DocumentId};

use super::chat_orchestrator::{ChatError, ChatOrchestrator};

/// Resolves the stored document, asks the orchestrator, records the turn.
pub struct ChatService<L: LlmClient> {
    orchestrator: ChatOrchestrator<L>,
    documents: Arc<dyn DocumentRepository>,
    conversations: Arc<dyn ConversationRepository>,
}

impl<L: LlmClient> ChatService<L> {
    pub fn new(
        orchestrator: ChatOrchestrator<L>,
        documents: Arc<dyn DocumentRepository>,
        conversations: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            orchestrator,
            documents,
            conversations,
        }
    }

    #[tracing::instrument(skip_all, fields(document_id = %document_id))]
    pub async fn ask(
        &self,
        document_id: DocumentId,
        hints: String,
        question: String,
    ) -> Result<ChatTurn, ChatServiceError> {
        let document = self
            .documents
            .get(document_id)
            .await?
            .ok_or(ChatServiceError::DocumentNotFound(document_id))?;

        let answer = self
            .orchestrator
            .answer(&hints, &question, document.text.as_str())
            .await?;

        let turn = ChatTurn::new(document_id, question, hints, answer);
        self.conversations.append_turn(&turn).await?;

        Ok(turn)
    }

    pub async fn history(&self, document_id: DocumentId) -> Result<Vec<ChatTurn>, ChatServiceError> {
        if self.documents.get(document_id).await?.is_none() {
            return Err(ChatServiceError::DocumentNotFound(document_id));
        }

        Ok(self.conversations.turns_for(document_id).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("document {0} not found")]
    DocumentNotFound(DocumentId),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error("storage: {0}")]
    Repository(#[from] RepositoryError),
}
