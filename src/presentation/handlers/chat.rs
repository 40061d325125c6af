use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{LlmClient, PdfParser};
use crate::application::services::{SanitizeError, sanitize};
use crate::domain::{ChatTurn, DocumentId};
use crate::infrastructure::observability::redact_for_log;
use crate::presentation::state::AppState;

use super::error_response::ApiError;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub document_id: Value,
    #[serde(default)]
    pub hints: Value,
    #[serde(default)]
    pub question: Value,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub status: &'static str,
    pub answer: String,
    pub turn_id: String,
}

#[derive(Debug, Serialize)]
pub struct TurnView {
    pub turn_id: String,
    pub question: String,
    pub hints: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

impl From<ChatTurn> for TurnView {
    fn from(turn: ChatTurn) -> Self {
        Self {
            turn_id: turn.id.as_uuid().to_string(),
            question: turn.question,
            hints: turn.hints,
            answer: turn.answer,
            asked_at: turn.asked_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub status: &'static str,
    pub document_id: String,
    pub turns: Vec<TurnView>,
}

#[tracing::instrument(skip_all, fields(document_id = tracing::field::Empty))]
pub async fn chat_handler<P, L>(
    State(state): State<AppState<P, L>>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PdfParser,
    L: LlmClient + 'static,
{
    let document_id = match &request.document_id {
        Value::String(raw) => parse_document_id(raw)?,
        Value::Null => return Err(ApiError::bad_request("document_id is required")),
        _ => return Err(ApiError::bad_request("document_id must be a string")),
    };
    tracing::Span::current().record("document_id", tracing::field::display(&document_id));
    let limits = state.field_limits;

    let hints = optional_field(&request.hints, "hints", limits.hints)?;
    let question = optional_field(&request.question, "question", limits.question)?;

    tracing::debug!(question = %redact_for_log(&question), "Processing chat request");

    let turn = state.chat_service.ask(document_id, hints, question).await?;

    Ok((
        StatusCode::OK,
        Json(ChatResponse {
            status: "success",
            turn_id: turn.id.as_uuid().to_string(),
            answer: turn.answer,
        }),
    ))
}

pub async fn history_handler<P, L>(
    State(state): State<AppState<P, L>>,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PdfParser,
    L: LlmClient + 'static,
{
    let document_id = parse_document_id(&document_id)?;
    let turns = state.chat_service.history(document_id).await?;

    Ok(Json(HistoryResponse {
        status: "success",
        document_id: document_id.to_string(),
        turns: turns.into_iter().map(TurnView::from).collect(),
    }))
}

fn parse_document_id(raw: &str) -> Result<DocumentId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("invalid document id: {}", raw.trim())))
}

/// Absent fields become empty text so the orchestrator can report which
/// input is missing.
fn optional_field(value: &Value, field: &'static str, max_len: usize) -> Result<String, SanitizeError> {
    match value {
        Value::Null => Ok(String::new()),
        other => sanitize(other, field, max_len),
    }
}
