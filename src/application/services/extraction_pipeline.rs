use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::{Duration, Instant};

use crate::application::ports::{PdfDocumentHandle, PdfParseError, PdfParser};
use crate::domain::{ExtractedText, UploadedDocument};

use super::size_guard::check_size;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Ceilings applied to every document. Built once from configuration and
/// copied into each extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionLimits {
    pub max_upload_bytes: u64,
    pub max_pages: usize,
    pub max_text_chars: usize,
    pub parse_timeout: Duration,
}

impl ExtractionLimits {
    pub fn new(
        max_upload_mb: u64,
        max_pages: usize,
        max_text_chars: usize,
        parse_timeout: Duration,
    ) -> Self {
        Self {
            max_upload_bytes: max_upload_mb.saturating_mul(BYTES_PER_MB),
            max_pages,
            max_text_chars,
            parse_timeout,
        }
    }
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self::new(20, 200, 5_000_000, Duration::from_secs(10))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExtractionStage {
    Start,
    SizeChecked,
    DecryptionChecked,
    PageCountChecked,
    Extracting,
}

impl ExtractionStage {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::SizeChecked,
            2 => Self::DecryptionChecked,
            3 => Self::PageCountChecked,
            4 => Self::Extracting,
            _ => Self::Start,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("file is empty")]
    Empty,
    #[error("file exceeds the size limit ({size} bytes, max {max})")]
    TooLarge { size: u64, max: u64 },
    #[error("file is encrypted and cannot be processed")]
    Encrypted,
    #[error("document has {pages} pages, max is {max}")]
    TooManyPages { pages: usize, max: usize },
    #[error("extracted text exceeds {max} characters")]
    TextTooLong { max: usize },
    #[error("no extractable text found, the document may be scanned images")]
    NoExtractableText,
    #[error("failed to parse PDF: {0}")]
    ParseFailure(String),
    #[error("PDF processing timed out after {}s", .after.as_secs_f32())]
    Timeout {
        after: Duration,
        stage: ExtractionStage,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionErrorKind {
    Empty,
    TooLarge,
    Encrypted,
    TooManyPages,
    TextTooLong,
    NoExtractableText,
    ParseFailure,
    Timeout,
}

impl ExtractionError {
    pub fn kind(&self) -> ExtractionErrorKind {
        match self {
            Self::Empty => ExtractionErrorKind::Empty,
            Self::TooLarge { .. } => ExtractionErrorKind::TooLarge,
            Self::Encrypted => ExtractionErrorKind::Encrypted,
            Self::TooManyPages { .. } => ExtractionErrorKind::TooManyPages,
            Self::TextTooLong { .. } => ExtractionErrorKind::TextTooLong,
            Self::NoExtractableText => ExtractionErrorKind::NoExtractableText,
            Self::ParseFailure(_) => ExtractionErrorKind::ParseFailure,
            Self::Timeout { .. } => ExtractionErrorKind::Timeout,
        }
    }
}

/// State shared between the awaiting caller and the blocking worker. Holds
/// no text: partial output lives only inside the worker and is dropped with
/// it.
#[derive(Default)]
struct Progress {
    cancelled: AtomicBool,
    stage: AtomicU8,
}

impl Progress {
    fn advance(&self, stage: ExtractionStage) {
        self.stage.store(stage as u8, Ordering::Release);
        tracing::trace!(?stage, "Extraction stage reached");
    }

    fn stage(&self) -> ExtractionStage {
        ExtractionStage::from_u8(self.stage.load(Ordering::Acquire))
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Size guard, decryption, page ceiling and per-page text extraction, all
/// under one wall-clock deadline.
pub struct ExtractionPipeline<P: PdfParser> {
    parser: Arc<P>,
    limits: ExtractionLimits,
}

impl<P: PdfParser> ExtractionPipeline<P> {
    pub fn new(parser: Arc<P>, limits: ExtractionLimits) -> Self {
        Self { parser, limits }
    }

    pub fn limits(&self) -> &ExtractionLimits {
        &self.limits
    }

    #[tracing::instrument(
        skip(self, upload),
        fields(filename = %upload.filename, bytes = upload.content.len())
    )]
    pub async fn extract(&self, upload: UploadedDocument) -> Result<ExtractedText, ExtractionError> {
        let parser = Arc::clone(&self.parser);
        let limits = self.limits;
        let progress = Arc::new(Progress::default());
        let worker_progress = Arc::clone(&progress);
        let deadline = Instant::now() + limits.parse_timeout;

        let worker = tokio::task::spawn_blocking(move || {
            run_stages(parser.as_ref(), &upload, &limits, &worker_progress, deadline)
        });

        let result = match tokio::time::timeout(limits.parse_timeout, worker).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => {
                tracing::error!(error = %join_error, "PDF extraction task aborted");
                Err(ExtractionError::ParseFailure(format!(
                    "extraction task aborted: {join_error}"
                )))
            }
            Err(_) => {
                progress.cancel();
                Err(ExtractionError::Timeout {
                    after: limits.parse_timeout,
                    stage: progress.stage(),
                })
            }
        };

        match &result {
            Ok(text) => tracing::info!(
                page_count = text.page_count(),
                char_count = text.char_count(),
                skipped_pages = text.skipped_pages().len(),
                "PDF text extraction complete"
            ),
            Err(e) => tracing::warn!(error = %e, kind = ?e.kind(), "PDF rejected"),
        }

        result
    }
}

fn run_stages<P: PdfParser>(
    parser: &P,
    upload: &UploadedDocument,
    limits: &ExtractionLimits,
    progress: &Progress,
    deadline: Instant,
) -> Result<ExtractedText, ExtractionError> {
    let mut stream = Cursor::new(upload.content.as_ref());
    let size = check_size(&mut stream, upload.declared_len, limits.max_upload_bytes)?;
    tracing::debug!(?size, "Size check passed");
    progress.advance(ExtractionStage::SizeChecked);

    let mut document = parser.open(upload.content.as_ref()).map_err(|e| match e {
        PdfParseError::PasswordRequired => ExtractionError::Encrypted,
        PdfParseError::Malformed(cause) => ExtractionError::ParseFailure(cause),
    })?;

    if document.is_encrypted() {
        if !document.attempt_decrypt("") {
            return Err(ExtractionError::Encrypted);
        }
        tracing::debug!("Encrypted PDF opened with empty password");
    }
    progress.advance(ExtractionStage::DecryptionChecked);

    let page_count = document.page_count();
    if page_count > limits.max_pages {
        return Err(ExtractionError::TooManyPages {
            pages: page_count,
            max: limits.max_pages,
        });
    }
    progress.advance(ExtractionStage::PageCountChecked);

    progress.advance(ExtractionStage::Extracting);
    let mut text = String::new();
    let mut char_count = 0usize;
    let mut skipped_pages = Vec::new();

    for index in 0..page_count {
        if progress.is_cancelled() || Instant::now() >= deadline {
            return Err(ExtractionError::Timeout {
                after: limits.parse_timeout,
                stage: ExtractionStage::Extracting,
            });
        }

        let page = match document.page_text(index) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(page = index, error = %e, "Skipping unreadable page");
                skipped_pages.push(index);
                continue;
            }
        };

        if page.trim().is_empty() {
            continue;
        }

        let separator = if text.is_empty() { 0 } else { 1 };
        char_count += separator + page.chars().count();
        if char_count > limits.max_text_chars {
            return Err(ExtractionError::TextTooLong {
                max: limits.max_text_chars,
            });
        }

        if separator == 1 {
            text.push('\n');
        }
        text.push_str(&page);
    }

    ExtractedText::new(text, page_count, skipped_pages).ok_or(ExtractionError::NoExtractableText)
}
