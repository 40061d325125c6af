mod chat;
mod contact;
mod error_response;
mod health;
mod upload;

pub use chat::{ChatRequest, ChatResponse, HistoryResponse, TurnView, chat_handler, history_handler};
pub use contact::{ContactRequest, ContactResponse, contact_handler};
pub use error_response::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use upload::{UploadResponse, upload_handler};
