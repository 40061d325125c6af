use async_trait::async_trait;

use crate::domain::{DocumentId, StoredDocument};

use super::RepositoryError;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn save(&self, document: &StoredDocument) -> Result<(), RepositoryError>;

    async fn get(&self, id: DocumentId) -> Result<Option<StoredDocument>, RepositoryError>;
}
