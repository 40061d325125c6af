use std::sync::Arc;

use pdfchat::application::ports::{DocumentRepository, LlmClientError};
use pdfchat::application::services::{
    ChatError, ChatOrchestrator, ChatService, ChatServiceError, DEFAULT_PERSONA,
};
use pdfchat::domain::{DocumentId, ExtractedText, StoredDocument};
use pdfchat::infrastructure::persistence::{
    InMemoryConversationRepository, InMemoryDocumentRepository,
};

use crate::helpers::mock_llm_client::MockLlmClient;

async fn service_with_document(
    client: MockLlmClient,
) -> (ChatService<MockLlmClient>, DocumentId) {
    let documents = Arc::new(InMemoryDocumentRepository::new());
    let text = ExtractedText::new("Holidays: 25 days".to_string(), 1, Vec::new()).unwrap();
    let document = StoredDocument::new("handbook.pdf".to_string(), text);
    documents.save(&document).await.unwrap();

    let orchestrator = ChatOrchestrator::new(Arc::new(client), DEFAULT_PERSONA.to_string());
    let service = ChatService::new(
        orchestrator,
        documents,
        Arc::new(InMemoryConversationRepository::new()),
    );
    (service, document.id)
}

#[tokio::test]
async fn given_stored_document_when_asking_then_records_turn() {
    let (service, document_id) = service_with_document(MockLlmClient::answering("25 days")).await;

    let turn = service
        .ask(document_id, "Answer in one line".into(), "How many holidays".into())
        .await
        .unwrap();

    assert_eq!(turn.answer, "25 days");
    let history = service.history(document_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, turn.id);
}

#[tokio::test]
async fn given_unknown_document_when_asking_then_returns_not_found() {
    let (service, _) = service_with_document(MockLlmClient::answering("unused")).await;
    let missing = DocumentId::new();

    let result = service.ask(missing, "hints".into(), "question".into()).await;

    assert!(matches!(result, Err(ChatServiceError::DocumentNotFound(id)) if id == missing));
}

#[tokio::test]
async fn given_rate_limited_model_when_asking_then_records_no_turn() {
    let (service, document_id) =
        service_with_document(MockLlmClient::failing(LlmClientError::RateLimited)).await;

    let result = service
        .ask(document_id, "hints".into(), "question".into())
        .await;

    assert!(matches!(
        result,
        Err(ChatServiceError::Chat(ChatError::RateLimited))
    ));
    assert!(service.history(document_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn given_unknown_document_when_reading_history_then_returns_not_found() {
    let (service, _) = service_with_document(MockLlmClient::answering("unused")).await;

    let result = service.history(DocumentId::new()).await;

    assert!(matches!(result, Err(ChatServiceError::DocumentNotFound(_))));
}
