use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ContactRepository, RepositoryError};
use crate::domain::ContactSubmission;

#[derive(Default)]
pub struct InMemoryContactRepository {
    submissions: RwLock<Vec<ContactSubmission>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn save(&self, submission: &ContactSubmission) -> Result<(), RepositoryError> {
        self.submissions.write().await.push(submission.clone());
        Ok(())
    }
}
