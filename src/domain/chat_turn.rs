use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::DocumentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatTurnId(Uuid);

impl ChatTurnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ChatTurnId {
    fn default() -> Self {
        Self::new()
    }
}

/// One question asked about a document and the answer it got.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub id: ChatTurnId,
    pub document_id: DocumentId,
    pub question: String,
    pub hints: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn new(document_id: DocumentId, question: String, hints: String, answer: String) -> Self {
        Self {
            id: ChatTurnId::new(),
            document_id,
            question,
            hints,
            answer,
            asked_at: Utc::now(),
        }
    }
}
