mod chat_turn;
mod contact_submission;
mod document;
mod document_id;
mod extracted_text;

pub use chat_turn::{ChatTurn, ChatTurnId};
pub use contact_submission::ContactSubmission;
pub use document::{StoredDocument, UploadedDocument};
pub use document_id::DocumentId;
pub use extracted_text::ExtractedText;
