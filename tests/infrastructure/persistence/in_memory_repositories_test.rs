use pdfchat::application::ports::{
    ContactRepository, ConversationRepository, DocumentRepository, RepositoryError,
};
use pdfchat::domain::{ChatTurn, ContactSubmission, DocumentId, ExtractedText, StoredDocument};
use pdfchat::infrastructure::persistence::{
    InMemoryContactRepository, InMemoryConversationRepository, InMemoryDocumentRepository,
};

fn document() -> StoredDocument {
    let text = ExtractedText::new("body".to_string(), 1, Vec::new()).unwrap();
    StoredDocument::new("a.pdf".to_string(), text)
}

#[tokio::test]
async fn given_saved_document_when_getting_then_returns_it() {
    let repository = InMemoryDocumentRepository::new();
    let document = document();

    repository.save(&document).await.unwrap();

    let found = repository.get(document.id).await.unwrap().unwrap();
    assert_eq!(found.text, document.text);
}

#[tokio::test]
async fn given_unknown_id_when_getting_document_then_returns_none() {
    let repository = InMemoryDocumentRepository::new();

    assert!(repository.get(DocumentId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn given_duplicate_id_when_saving_document_then_returns_conflict() {
    let repository = InMemoryDocumentRepository::new();
    let document = document();
    repository.save(&document).await.unwrap();

    let result = repository.save(&document).await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[tokio::test]
async fn given_turns_for_two_documents_when_listing_then_keeps_them_apart_in_order() {
    let repository = InMemoryConversationRepository::new();
    let first_doc = DocumentId::new();
    let other_doc = DocumentId::new();

    for question in ["q1", "q2"] {
        let turn = ChatTurn::new(first_doc, question.into(), "h".into(), "a".into());
        repository.append_turn(&turn).await.unwrap();
    }
    let other = ChatTurn::new(other_doc, "q3".into(), "h".into(), "a".into());
    repository.append_turn(&other).await.unwrap();

    let turns = repository.turns_for(first_doc).await.unwrap();
    let questions: Vec<_> = turns.iter().map(|t| t.question.as_str()).collect();
    assert_eq!(questions, ["q1", "q2"]);
    assert_eq!(repository.turns_for(other_doc).await.unwrap().len(), 1);
}

#[tokio::test]
async fn given_saved_contact_when_listing_then_returns_it() {
    let repository = InMemoryContactRepository::new();
    let submission = ContactSubmission::new("a@b.io".into(), "hi".into());

    repository.save(&submission).await.unwrap();

    assert_eq!(repository.submissions().await.len(), 1);
}
