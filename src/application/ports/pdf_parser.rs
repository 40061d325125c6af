/// Narrow view of a PDF library: enough to decide whether a document can be
/// read and to pull its text out page by page.
///
/// Implementations are synchronous. The extraction pipeline drives them from
/// a blocking task under a deadline.
pub trait PdfParser: Send + Sync + 'static {
    type Document: PdfDocumentHandle;

    fn open(&self, data: &[u8]) -> Result<Self::Document, PdfParseError>;
}

pub trait PdfDocumentHandle: Send {
    fn is_encrypted(&self) -> bool;

    /// Returns `true` when the password unlocked the document.
    fn attempt_decrypt(&mut self, password: &str) -> bool;

    fn page_count(&self) -> usize;

    /// Text of the zero-based page `index`.
    fn page_text(&self, index: usize) -> Result<String, PageExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfParseError {
    #[error("malformed PDF: {0}")]
    Malformed(String),
    #[error("document requires a password to open")]
    PasswordRequired,
}

#[derive(Debug, thiserror::Error)]
#[error("page {index}: {reason}")]
pub struct PageExtractionError {
    pub index: usize,
    pub reason: String,
}
