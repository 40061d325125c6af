use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use pdfchat::application::ports::{ContactRepository, ConversationRepository, DocumentRepository};
use pdfchat::application::services::{
    ChatOrchestrator, ChatService, ContactService, DocumentService, ExtractionPipeline,
};
use pdfchat::infrastructure::llm::OpenAiClient;
use pdfchat::infrastructure::observability::init_tracing;
use pdfchat::infrastructure::persistence::{
    InMemoryContactRepository, InMemoryConversationRepository, InMemoryDocumentRepository,
};
use pdfchat::infrastructure::text_processing::LopdfParser;
use pdfchat::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (environment, settings) = Settings::load().context("failed to load settings")?;

    init_tracing(&settings.tracing_config(environment), settings.server.port);

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No LLM API key configured, chat requests will fail");
    }

    let llm_client = Arc::new(
        OpenAiClient::new(
            settings.llm.api_key.clone(),
            settings.llm.base_url.clone(),
            settings.llm.chat_model.clone(),
            settings.llm.temperature,
            settings.llm.request_timeout(),
        )
        .context("failed to build LLM client")?,
    );

    let documents: Arc<dyn DocumentRepository> = Arc::new(InMemoryDocumentRepository::new());
    let conversations: Arc<dyn ConversationRepository> =
        Arc::new(InMemoryConversationRepository::new());
    let contacts: Arc<dyn ContactRepository> = Arc::new(InMemoryContactRepository::new());

    let limits = settings.limits.extraction_limits();
    tracing::info!(
        max_upload_bytes = limits.max_upload_bytes,
        max_pages = limits.max_pages,
        max_text_chars = limits.max_text_chars,
        parse_timeout_secs = limits.parse_timeout.as_secs(),
        "Extraction limits"
    );

    let pipeline = ExtractionPipeline::new(Arc::new(LopdfParser::new()), limits);
    let orchestrator = ChatOrchestrator::new(llm_client, settings.llm.persona.clone());

    let state = AppState {
        document_service: Arc::new(DocumentService::new(pipeline, Arc::clone(&documents))),
        chat_service: Arc::new(ChatService::new(orchestrator, documents, conversations)),
        contact_service: Arc::new(ContactService::new(contacts)),
        field_limits: settings.limits.field_limits(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
