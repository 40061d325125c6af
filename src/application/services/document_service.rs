use std::sync::Arc;

use crate::application::ports::{DocumentRepository, PdfParser, RepositoryError};
use crate::domain::{StoredDocument, UploadedDocument};

use super::extraction_pipeline::{ExtractionError, ExtractionPipeline};

pub struct DocumentService<P: PdfParser> {
    pipeline: ExtractionPipeline<P>,
    repository: Arc<dyn DocumentRepository>,
}

impl<P: PdfParser> DocumentService<P> {
    pub fn new(pipeline: ExtractionPipeline<P>, repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            pipeline,
            repository,
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.pipeline.limits().max_upload_bytes
    }

    pub async fn upload(&self, upload: UploadedDocument) -> Result<StoredDocument, UploadError> {
        if !upload.has_pdf_extension() {
            return Err(UploadError::NotPdf(upload.filename));
        }

        let filename = upload.filename.clone();
        let text = self.pipeline.extract(upload).await?;
        let document = StoredDocument::new(filename, text);

        self.repository.save(&document).await?;

        tracing::info!(
            document_id = %document.id,
            filename = %document.filename,
            "Document stored"
        );

        Ok(document)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("file {0} is not a PDF")]
    NotPdf(String),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("storage: {0}")]
    Repository(#[from] RepositoryError),
}
