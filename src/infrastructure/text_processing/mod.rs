mod lopdf_parser;
mod text_sanitizer;

pub use lopdf_parser::{LopdfDocument, LopdfParser};
pub use text_sanitizer::sanitize_extracted_text;
