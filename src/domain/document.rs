use bytes::Bytes;
use chrono::{DateTime, Utc};

use super::{DocumentId, ExtractedText};

/// A file as received at the upload boundary.
///
/// `declared_len` is whatever length metadata arrived with the upload, if
/// any. It is only trusted when the content itself cannot be measured.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub declared_len: Option<u64>,
    pub content: Bytes,
}

impl UploadedDocument {
    pub fn new(filename: String, content: Bytes) -> Self {
        Self {
            filename,
            declared_len: None,
            content,
        }
    }

    pub fn with_declared_len(mut self, declared_len: u64) -> Self {
        self.declared_len = Some(declared_len);
        self
    }

    pub fn has_pdf_extension(&self) -> bool {
        self.filename
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"))
    }
}

#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub filename: String,
    pub text: ExtractedText,
    pub uploaded_at: DateTime<Utc>,
}

impl StoredDocument {
    pub fn new(filename: String, text: ExtractedText) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            text,
            uploaded_at: Utc::now(),
        }
    }
}
