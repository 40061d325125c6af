mod chat_orchestrator;
mod chat_service;
mod contact_service;
mod document_service;
mod extraction_pipeline;
mod request_sanitizer;
mod size_guard;

pub use chat_orchestrator::{ChatError, ChatErrorKind, ChatOrchestrator, DEFAULT_PERSONA};
pub use chat_service::{ChatService, ChatServiceError};
pub use contact_service::{ContactError, ContactService};
pub use document_service::{DocumentService, UploadError};
pub use extraction_pipeline::{
    ExtractionError, ExtractionErrorKind, ExtractionLimits, ExtractionPipeline, ExtractionStage,
};
pub use request_sanitizer::{
    FieldLimits, SanitizeError, SanitizeErrorKind, escape_html, is_unsafe_code_point, sanitize,
    sanitize_text,
};
pub use size_guard::{SizeCheck, check_size};
