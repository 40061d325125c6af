mod in_memory_contact_repository;
mod in_memory_conversation_repository;
mod in_memory_document_repository;

pub use in_memory_contact_repository::InMemoryContactRepository;
pub use in_memory_conversation_repository::InMemoryConversationRepository;
pub use in_memory_document_repository::InMemoryDocumentRepository;
