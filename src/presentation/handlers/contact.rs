use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{LlmClient, PdfParser};
use crate::application::services::sanitize;
use crate::presentation::state::AppState;

use super::error_response::ApiError;

const MAX_EMAIL_LEN: usize = 254;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub message: Value,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[tracing::instrument(skip_all)]
pub async fn contact_handler<P, L>(
    State(state): State<AppState<P, L>>,
    Json(request): Json<ContactRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PdfParser,
    L: LlmClient + 'static,
{
    if request.email.is_null() || request.message.is_null() {
        return Err(ApiError::bad_request("email and message are required"));
    }

    let email = sanitize(&request.email, "email", MAX_EMAIL_LEN)?;
    let message = sanitize(
        &request.message,
        "message",
        state.field_limits.contact_message,
    )?;

    state.contact_service.submit(email, message).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            status: "success",
            message: "Message received",
        }),
    ))
}
