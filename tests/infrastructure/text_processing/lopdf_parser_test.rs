use pdfchat::application::ports::{PdfDocumentHandle, PdfParseError, PdfParser};
use pdfchat::infrastructure::text_processing::LopdfParser;

use crate::helpers::pdf_fixture::{build_pdf, owner_password_only_pdf, single_page_pdf, user_password_pdf};

#[test]
fn given_valid_pdf_when_opening_then_reports_pages() {
    let document = LopdfParser::new().open(&build_pdf(&["one", "two"])).unwrap();

    assert_eq!(document.page_count(), 2);
    assert!(!document.is_encrypted());
}

#[test]
fn given_valid_pdf_when_reading_page_then_returns_cleaned_text() {
    let document = LopdfParser::new()
        .open(&single_page_pdf("This is a test PDF"))
        .unwrap();

    let text = document.page_text(0).unwrap();

    assert!(text.contains("This is a test PDF"));
    assert_eq!(text, text.trim());
}

#[test]
fn given_out_of_range_index_when_reading_page_then_returns_error() {
    let document = LopdfParser::new().open(&single_page_pdf("x")).unwrap();

    let error = document.page_text(5).unwrap_err();

    assert_eq!(error.index, 5);
}

#[test]
fn given_garbage_when_opening_then_returns_malformed() {
    let result = LopdfParser::new().open(b"%PDF-garbage");

    assert!(matches!(result, Err(PdfParseError::Malformed(_))));
}

#[test]
fn given_non_pdf_bytes_mentioning_encrypt_when_opening_then_returns_malformed() {
    let result = LopdfParser::new().open(b"this is not a pdf /Encrypt at all");

    assert!(matches!(result, Err(PdfParseError::Malformed(_))));
}

#[test]
fn given_user_password_pdf_when_opening_then_stays_locked_for_empty_password() {
    let mut document = LopdfParser::new().open(&user_password_pdf()).unwrap();

    assert!(document.is_encrypted());
    assert!(!document.attempt_decrypt(""));
    assert!(document.is_encrypted());
}

#[test]
fn given_user_password_pdf_when_decrypting_with_password_then_text_is_readable() {
    let mut document = LopdfParser::new().open(&user_password_pdf()).unwrap();

    assert!(document.attempt_decrypt("password123"));

    assert!(!document.is_encrypted());
    assert!(document.page_text(0).unwrap().contains("This is a test PDF"));
}

#[test]
fn given_owner_password_only_pdf_when_opening_then_text_is_readable() {
    let document = LopdfParser::new().open(&owner_password_only_pdf()).unwrap();

    assert!(!document.is_encrypted());
    assert_eq!(document.page_count(), 1);
    assert!(document.page_text(0).unwrap().contains("This is a test PDF"));
}
