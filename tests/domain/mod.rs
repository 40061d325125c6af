mod document_test;
mod extracted_text_test;
