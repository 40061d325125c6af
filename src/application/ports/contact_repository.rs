use async_trait::async_trait;

use crate::domain::ContactSubmission;

use super::RepositoryError;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn save(&self, submission: &ContactSubmission) -> Result<(), RepositoryError>;
}
