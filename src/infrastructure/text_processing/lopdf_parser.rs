use lopdf::Document;

use crate::application::ports::{
    PageExtractionError, PdfDocumentHandle, PdfParseError, PdfParser,
};

use super::text_sanitizer::sanitize_extracted_text;

/// [`PdfParser`] backed by `lopdf`, loading straight from memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfParser;

impl LopdfParser {
    pub fn new() -> Self {
        Self
    }
}

impl PdfParser for LopdfParser {
    type Document = LopdfDocument;

    fn open(&self, data: &[u8]) -> Result<Self::Document, PdfParseError> {
        // Encrypted files load locked; lopdf only unlocks them itself when
        // the empty password authenticates.
        Document::load_mem(data)
            .map(LopdfDocument::new)
            .map_err(|e| PdfParseError::Malformed(e.to_string()))
    }
}

pub struct LopdfDocument {
    inner: Document,
    page_numbers: Vec<u32>,
}

impl LopdfDocument {
    fn new(inner: Document) -> Self {
        let page_numbers = inner.get_pages().into_keys().collect();
        Self {
            inner,
            page_numbers,
        }
    }
}

impl PdfDocumentHandle for LopdfDocument {
    fn is_encrypted(&self) -> bool {
        self.inner.is_encrypted()
    }

    fn attempt_decrypt(&mut self, password: &str) -> bool {
        match self.inner.decrypt(password) {
            Ok(()) => {
                self.page_numbers = self.inner.get_pages().into_keys().collect();
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "PDF decryption failed");
                false
            }
        }
    }

    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, PageExtractionError> {
        let page_number = *self.page_numbers.get(index).ok_or(PageExtractionError {
            index,
            reason: "page index out of range".to_string(),
        })?;

        self.inner
            .extract_text(&[page_number])
            .map(|raw| sanitize_extracted_text(&raw))
            .map_err(|e| PageExtractionError {
                index,
                reason: e.to_string(),
            })
    }
}
