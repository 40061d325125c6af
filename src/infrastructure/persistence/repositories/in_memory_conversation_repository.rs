use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{ChatTurn, DocumentId};

#[derive(Default)]
pub struct InMemoryConversationRepository {
    turns: RwLock<HashMap<DocumentId, Vec<ChatTurn>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    #[instrument(
        skip(self, turn),
        fields(document_id = %turn.document_id, turn_id = %turn.id.as_uuid())
    )]
    async fn append_turn(&self, turn: &ChatTurn) -> Result<(), RepositoryError> {
        self.turns
            .write()
            .await
            .entry(turn.document_id)
            .or_default()
            .push(turn.clone());
        Ok(())
    }

    async fn turns_for(&self, document_id: DocumentId) -> Result<Vec<ChatTurn>, RepositoryError> {
        Ok(self
            .turns
            .read()
            .await
            .get(&document_id)
            .cloned()
            .unwrap_or_default())
    }
}
