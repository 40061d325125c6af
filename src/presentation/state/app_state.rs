use std::sync::Arc;

use crate::application::ports::{LlmClient, PdfParser};
use crate::application::services::{ChatService, ContactService, DocumentService, FieldLimits};

pub struct AppState<P, L>
where
    P: PdfParser,
    L: LlmClient,
{
    pub document_service: Arc<DocumentService<P>>,
    pub chat_service: Arc<ChatService<L>>,
    pub contact_service: Arc<ContactService>,
    pub field_limits: FieldLimits,
}

impl<P, L> Clone for AppState<P, L>
where
    P: PdfParser,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            document_service: Arc::clone(&self.document_service),
            chat_service: Arc::clone(&self.chat_service),
            contact_service: Arc::clone(&self.contact_service),
            field_limits: self.field_limits,
        }
    }
}
