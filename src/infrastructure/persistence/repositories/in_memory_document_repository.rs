use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::domain::{DocumentId, StoredDocument};

#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<DocumentId, StoredDocument>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    #[instrument(skip(self, document), fields(document_id = %document.id))]
    async fn save(&self, document: &StoredDocument) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(&document.id) {
            return Err(RepositoryError::Conflict(format!(
                "document {} already stored",
                document.id
            )));
        }
        documents.insert(document.id, document.clone());
        Ok(())
    }

    async fn get(&self, id: DocumentId) -> Result<Option<StoredDocument>, RepositoryError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }
}
