mod lopdf_parser_test;
mod text_sanitizer_test;
