use async_trait::async_trait;

use crate::domain::{ChatTurn, DocumentId};

use super::RepositoryError;

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn append_turn(&self, turn: &ChatTurn) -> Result<(), RepositoryError>;

    /// Turns for a document, oldest first.
    async fn turns_for(&self, document_id: DocumentId) -> Result<Vec<ChatTurn>, RepositoryError>;
}
