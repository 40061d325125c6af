use pdfchat::domain::ExtractedText;

#[test]
fn given_blank_text_when_building_then_returns_none() {
    assert!(ExtractedText::new("  \n ".to_string(), 2, Vec::new()).is_none());
}

#[test]
fn given_text_when_building_then_counts_characters_not_bytes() {
    let text = ExtractedText::new("Çalışma".to_string(), 1, Vec::new()).unwrap();

    assert_eq!(text.char_count(), 7);
    assert_eq!(text.into_string(), "Çalışma");
}
