use bytes::Bytes;
use pdfchat::domain::UploadedDocument;

fn named(filename: &str) -> UploadedDocument {
    UploadedDocument::new(filename.to_string(), Bytes::from_static(b"%PDF"))
}

#[test]
fn given_pdf_filenames_when_checking_extension_then_accepts_any_case() {
    assert!(named("report.pdf").has_pdf_extension());
    assert!(named("REPORT.PDF").has_pdf_extension());
    assert!(named("archive.2024.Pdf").has_pdf_extension());
}

#[test]
fn given_other_filenames_when_checking_extension_then_rejects() {
    assert!(!named("report.docx").has_pdf_extension());
    assert!(!named("pdf").has_pdf_extension());
    assert!(!named(".pdf").has_pdf_extension());
    assert!(!named("").has_pdf_extension());
}

#[test]
fn given_declared_length_when_building_upload_then_keeps_it() {
    let upload = named("a.pdf").with_declared_len(4);

    assert_eq!(upload.declared_len, Some(4));
    assert_eq!(named("a.pdf").declared_len, None);
}
