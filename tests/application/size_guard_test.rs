use std::io::{self, Cursor, Read, Seek, SeekFrom};

use pdfchat::application::services::{ExtractionError, SizeCheck, check_size};

/// Reports a position but refuses to seek to the end.
struct EndlessStream;

impl Seek for EndlessStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match pos {
            SeekFrom::End(_) => Err(io::Error::new(io::ErrorKind::Unsupported, "no end")),
            SeekFrom::Start(offset) => Ok(offset),
            SeekFrom::Current(_) => Ok(0),
        }
    }
}

#[test]
fn given_zero_bytes_when_checking_size_then_returns_empty() {
    let mut stream = Cursor::new(Vec::<u8>::new());

    let result = check_size(&mut stream, None, 1024);

    assert!(matches!(result, Err(ExtractionError::Empty)));
}

#[test]
fn given_stream_over_ceiling_when_checking_size_then_returns_too_large() {
    let mut stream = Cursor::new(vec![b'%'; 2048]);

    let result = check_size(&mut stream, None, 1024);

    assert!(matches!(
        result,
        Err(ExtractionError::TooLarge {
            size: 2048,
            max: 1024
        })
    ));
}

#[test]
fn given_stream_exactly_at_ceiling_when_checking_size_then_accepts() {
    let mut stream = Cursor::new(vec![0u8; 1024]);

    let result = check_size(&mut stream, None, 1024);

    assert_eq!(result.unwrap(), SizeCheck::Known(1024));
}

#[test]
fn given_partially_read_stream_when_checking_size_then_restores_position() {
    let mut stream = Cursor::new(b"%PDF-1.7 body".to_vec());
    let mut prefix = [0u8; 4];
    stream.read_exact(&mut prefix).unwrap();

    let result = check_size(&mut stream, None, 1024);

    assert_eq!(result.unwrap(), SizeCheck::Known(9));
    assert_eq!(stream.position(), 4);
}

#[test]
fn given_measurable_stream_when_declared_len_lies_then_measured_len_wins() {
    let mut stream = Cursor::new(vec![1u8; 2048]);

    let result = check_size(&mut stream, Some(10), 1024);

    assert!(matches!(result, Err(ExtractionError::TooLarge { .. })));
}

#[test]
fn given_unmeasurable_stream_when_declared_len_present_then_uses_declared_len() {
    let result = check_size(&mut EndlessStream, Some(0), 1024);

    assert!(matches!(result, Err(ExtractionError::Empty)));
}

#[test]
fn given_unmeasurable_stream_without_declared_len_when_checking_size_then_returns_unknown() {
    let result = check_size(&mut EndlessStream, None, 1024);

    assert_eq!(result.unwrap(), SizeCheck::Unknown);
}
