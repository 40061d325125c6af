/// Text recovered from a PDF, pages concatenated in reading order.
///
/// Only constructible with non-blank text: a document that yields nothing is
/// an extraction failure, never an empty success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    char_count: usize,
    page_count: usize,
    skipped_pages: Vec<usize>,
}

impl ExtractedText {
    pub fn new(text: String, page_count: usize, skipped_pages: Vec<usize>) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }

        Some(Self {
            char_count: text.chars().count(),
            text,
            page_count,
            skipped_pages,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Zero-based indexes of pages whose text could not be read.
    pub fn skipped_pages(&self) -> &[usize] {
        &self.skipped_pages
    }
}
