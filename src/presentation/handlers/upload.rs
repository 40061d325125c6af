use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{LlmClient, PdfParser};
use crate::domain::UploadedDocument;
use crate::presentation::state::AppState;

use super::error_response::ApiError;

const FILE_FIELD: &str = "files";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub status: &'static str,
    pub document_id: String,
    pub filename: String,
    pub page_count: usize,
    pub char_count: usize,
    pub skipped_pages: Vec<usize>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<P, L>(
    State(state): State<AppState<P, L>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    P: PdfParser,
    L: LlmClient + 'static,
{
    let upload = read_single_file(multipart).await?;

    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.content.len(),
        "Processing PDF upload"
    );

    let document = state.document_service.upload(upload).await?;

    Ok((
        StatusCode::OK,
        Json(UploadResponse {
            status: "success",
            document_id: document.id.to_string(),
            filename: document.filename,
            page_count: document.text.page_count(),
            char_count: document.text.char_count(),
            skipped_pages: document.text.skipped_pages().to_vec(),
        }),
    ))
}

/// Drains the multipart body and returns the one `files` part. Other parts
/// are ignored.
async fn read_single_file(mut multipart: Multipart) -> Result<UploadedDocument, ApiError> {
    let mut file: Option<(String, Bytes)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(ApiError::new(e.status(), e.body_text())),
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        if file.is_some() {
            return Err(ApiError::bad_request("Only single file upload is supported"));
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;

        file = Some((filename, data));
    }

    let (filename, data) = file.ok_or_else(|| ApiError::bad_request("No file part in the request"))?;

    if filename.is_empty() {
        return Err(ApiError::bad_request("No selected file"));
    }

    let declared_len = data.len() as u64;
    Ok(UploadedDocument::new(filename, data).with_declared_len(declared_len))
}
