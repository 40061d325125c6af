use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(email: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            message,
            submitted_at: Utc::now(),
        }
    }
}
