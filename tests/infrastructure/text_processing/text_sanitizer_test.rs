use pdfchat::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_text_with_fi_ligature_when_sanitizing_then_decomposes_to_fi() {
    let result = sanitize_extracted_text("ﬁnding the ﬁle");
    assert_eq!(result, "finding the file");
}

#[test]
fn given_text_with_excessive_newlines_when_sanitizing_then_collapses_to_paragraph_breaks() {
    let result = sanitize_extracted_text("paragraph one\n\n\n\n\nparagraph two");
    assert_eq!(result, "paragraph one\n\nparagraph two");
}

#[test]
fn given_text_with_redundant_spaces_when_sanitizing_then_collapses_to_single_space() {
    let result = sanitize_extracted_text("hello    world   test");
    assert_eq!(result, "hello world test");
}

#[test]
fn given_whitespace_only_text_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text("   \n\n  "), "");
}

#[test]
fn given_text_with_hyphenated_line_break_when_sanitizing_then_merges_word() {
    let result = sanitize_extracted_text("Annual leave is calcu-\nlated monthly");
    assert_eq!(result, "Annual leave is calculated monthly");
}

#[test]
fn given_text_with_list_marker_hyphen_when_sanitizing_then_preserves_list() {
    let input = "Benefits:\n- dental\n- pension";
    assert_eq!(sanitize_extracted_text(input), input);
}

#[test]
fn given_text_with_control_characters_when_sanitizing_then_drops_them() {
    let result = sanitize_extracted_text("Sal\u{0007}ary\u{0000} band");
    assert_eq!(result, "Salary band");
}

#[test]
fn given_crlf_line_endings_when_sanitizing_then_normalizes_to_newlines() {
    let result = sanitize_extracted_text("line one\r\nline two");
    assert_eq!(result, "line one\nline two");
}
