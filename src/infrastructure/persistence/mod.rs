mod repositories;

pub use repositories::{
    InMemoryContactRepository, InMemoryConversationRepository, InMemoryDocumentRepository,
};
