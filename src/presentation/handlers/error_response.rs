use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{
    ChatError, ChatServiceError, ContactError, ExtractionError, SanitizeError, UploadError,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

/// An error on its way out of a handler: status code plus the message shown
/// to the caller.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "Request failed");
        } else {
            tracing::warn!(status = %self.status, message = %self.message, "Request rejected");
        }

        (
            self.status,
            Json(ErrorResponse {
                status: "error",
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<ExtractionError> for ApiError {
    fn from(error: ExtractionError) -> Self {
        let status = match &error {
            ExtractionError::Empty | ExtractionError::ParseFailure(_) => StatusCode::BAD_REQUEST,
            ExtractionError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ExtractionError::Encrypted
            | ExtractionError::TooManyPages { .. }
            | ExtractionError::TextTooLong { .. }
            | ExtractionError::NoExtractableText
            | ExtractionError::Timeout { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Self::new(status, error.to_string())
    }
}

impl From<UploadError> for ApiError {
    fn from(error: UploadError) -> Self {
        match error {
            UploadError::NotPdf(_) => Self::bad_request("Only PDF files are allowed"),
            UploadError::Extraction(e) => e.into(),
            UploadError::Repository(e) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(error: ChatError) -> Self {
        let status = match &error {
            ChatError::MissingInput(_) => StatusCode::BAD_REQUEST,
            ChatError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ChatError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ChatError::UnknownFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, error.to_string())
    }
}

impl From<ChatServiceError> for ApiError {
    fn from(error: ChatServiceError) -> Self {
        match error {
            ChatServiceError::DocumentNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, error.to_string())
            }
            ChatServiceError::Chat(e) => e.into(),
            ChatServiceError::Repository(e) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(error: ContactError) -> Self {
        match error {
            ContactError::InvalidEmail | ContactError::EmptyMessage => {
                Self::bad_request(error.to_string())
            }
            ContactError::Repository(e) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}

impl From<SanitizeError> for ApiError {
    fn from(error: SanitizeError) -> Self {
        Self::bad_request(error.to_string())
    }
}
