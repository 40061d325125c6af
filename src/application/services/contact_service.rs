use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::application::ports::{ContactRepository, RepositoryError};
use crate::domain::ContactSubmission;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Stores a contact form. Both fields must already be sanitized.
    pub async fn submit(
        &self,
        email: String,
        message: String,
    ) -> Result<ContactSubmission, ContactError> {
        if !EMAIL.is_match(&email) {
            return Err(ContactError::InvalidEmail);
        }
        if message.trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }

        let submission = ContactSubmission::new(email, message);
        self.repository.save(&submission).await?;

        // Admin notification is delivered from the log stream.
        tracing::info!(
            submission_id = %submission.id,
            message_chars = submission.message.chars().count(),
            "Contact form submitted"
        );

        Ok(submission)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("message is required")]
    EmptyMessage,
    #[error("storage: {0}")]
    Repository(#[from] RepositoryError),
}
