use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

const MAX_SINGLE_CHAR_RUN: usize = 100;
const MIN_ENCODED_PAYLOAD_LEN: usize = 2000;

static BASE64_PAYLOAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").unwrap());

/// Per-field length ceilings for user-supplied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub hints: usize,
    pub question: usize,
    pub contact_message: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            hints: 500,
            question: 1000,
            contact_message: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    #[error("{field} must be text")]
    InvalidType { field: &'static str },
    #[error("{field} contains invisible or control characters")]
    UnsafeUnicode { field: &'static str },
    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("{field} was rejected: {reason}")]
    SuspiciousPayload {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanitizeErrorKind {
    InvalidType,
    UnsafeUnicode,
    TooLong,
    SuspiciousPayload,
}

impl SanitizeError {
    pub fn kind(&self) -> SanitizeErrorKind {
        match self {
            Self::InvalidType { .. } => SanitizeErrorKind::InvalidType,
            Self::UnsafeUnicode { .. } => SanitizeErrorKind::UnsafeUnicode,
            Self::TooLong { .. } => SanitizeErrorKind::TooLong,
            Self::SuspiciousPayload { .. } => SanitizeErrorKind::SuspiciousPayload,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidType { field }
            | Self::UnsafeUnicode { field }
            | Self::TooLong { field, .. }
            | Self::SuspiciousPayload { field, .. } => *field,
        }
    }
}

/// Validates and cleans a raw request field. Anything other than a JSON
/// string is rejected as `InvalidType`.
pub fn sanitize(
    value: &Value,
    field: &'static str,
    max_len: usize,
) -> Result<String, SanitizeError> {
    match value {
        Value::String(text) => sanitize_text(text, field, max_len),
        _ => Err(SanitizeError::InvalidType { field }),
    }
}

/// Trims, rejects unsafe code points and over-long input, HTML-escapes, then
/// screens the escaped text for degenerate or encoded payloads. The first
/// failing check wins.
pub fn sanitize_text(
    raw: &str,
    field: &'static str,
    max_len: usize,
) -> Result<String, SanitizeError> {
    let trimmed = raw.trim();

    if trimmed.chars().any(is_unsafe_code_point) {
        return Err(SanitizeError::UnsafeUnicode { field });
    }

    let len = trimmed.chars().count();
    if len > max_len {
        return Err(SanitizeError::TooLong {
            field,
            max: max_len,
            actual: len,
        });
    }

    let escaped = escape_html(trimmed);
    let escaped_len = escaped.chars().count();

    if is_single_char_run(&escaped, escaped_len) {
        return Err(SanitizeError::SuspiciousPayload {
            field,
            reason: "repeated single character",
        });
    }

    if escaped_len >= MIN_ENCODED_PAYLOAD_LEN && BASE64_PAYLOAD.is_match(&escaped) {
        return Err(SanitizeError::SuspiciousPayload {
            field,
            reason: "encoded payload",
        });
    }

    Ok(escaped)
}

/// Zero-width, bidi override/isolate, BOM, and C0 controls other than tab,
/// newline and carriage return.
pub fn is_unsafe_code_point(c: char) -> bool {
    matches!(
        c,
        '\u{202A}'..='\u{202E}'
            | '\u{2066}'..='\u{2069}'
            | '\u{200B}'..='\u{200D}'
            | '\u{FEFF}'
            | '\u{0000}'..='\u{0008}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000E}'..='\u{001F}'
            | '\u{007F}'
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn is_single_char_run(text: &str, len: usize) -> bool {
    if len <= MAX_SINGLE_CHAR_RUN {
        return false;
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}
