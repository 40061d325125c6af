use std::io::{Seek, SeekFrom};

use super::extraction_pipeline::ExtractionError;

/// Outcome of a size check that let the upload through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCheck {
    Known(u64),
    /// Neither the stream nor the metadata gave a length. Processing goes on
    /// and relies on the page and character ceilings instead.
    Unknown,
}

/// Rejects empty and oversized uploads before any parsing happens.
///
/// The length is measured by seeking to the end of the stream; the declared
/// length is only used when the stream cannot be measured. The stream is
/// always left at the offset it had on entry.
pub fn check_size<S: Seek>(
    stream: &mut S,
    declared_len: Option<u64>,
    max_bytes: u64,
) -> Result<SizeCheck, ExtractionError> {
    let Some(len) = measure_remaining(stream)?.or(declared_len) else {
        tracing::warn!(
            max_bytes,
            "Upload length could not be determined, continuing without size check"
        );
        return Ok(SizeCheck::Unknown);
    };

    if len == 0 {
        return Err(ExtractionError::Empty);
    }

    if len > max_bytes {
        return Err(ExtractionError::TooLarge {
            size: len,
            max: max_bytes,
        });
    }

    Ok(SizeCheck::Known(len))
}

fn measure_remaining<S: Seek>(stream: &mut S) -> Result<Option<u64>, ExtractionError> {
    let Ok(origin) = stream.stream_position() else {
        return Ok(None);
    };

    let end = stream.seek(SeekFrom::End(0));

    stream
        .seek(SeekFrom::Start(origin))
        .map_err(|e| ExtractionError::ParseFailure(format!("failed to rewind upload: {e}")))?;

    Ok(end.ok().map(|end| end.saturating_sub(origin)))
}
