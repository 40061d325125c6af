mod contact_repository;
mod conversation_repository;
mod document_repository;
mod llm_client;
mod pdf_parser;
mod repository_error;

pub use contact_repository::ContactRepository;
pub use conversation_repository::ConversationRepository;
pub use document_repository::DocumentRepository;
pub use llm_client::{AssistantPrompt, LlmClient, LlmClientError};
pub use pdf_parser::{PageExtractionError, PdfDocumentHandle, PdfParseError, PdfParser};
pub use repository_error::RepositoryError;
