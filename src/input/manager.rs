//! Input manager: routes documents to extractors and assembles the corpus

use crate::config::FailurePolicy;
use crate::error::{Result, ResumeRankerError};
use crate::input::document::Document;
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use indicatif::ProgressBar;
use log::{info, warn};
use tokio::task;

/// One corpus entry: the extracted text, still tied to its document name.
#[derive(Debug, Clone)]
pub struct ExtractedResume {
    pub name: String,
    pub text: String,
}

pub struct InputManager {
    failure_policy: FailurePolicy,
}

impl InputManager {
    pub fn new(failure_policy: FailurePolicy) -> Self {
        Self { failure_policy }
    }

    /// Extract plain text from a single document based on its detected type.
    pub fn extract_document(document: &Document) -> Result<String> {
        match FileType::from_name(&document.name) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", document.name);
                PdfExtractor.extract(&document.name, &document.bytes)
            }
            FileType::Text => {
                info!("Reading plain text document: {}", document.name);
                PlainTextExtractor.extract(&document.name, &document.bytes)
            }
            FileType::Markdown => {
                info!("Processing markdown document: {}", document.name);
                MarkdownExtractor.extract(&document.name, &document.bytes)
            }
            FileType::Unknown => Err(ResumeRankerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                document.name
            ))),
        }
    }

    /// Extract all documents into an index-aligned corpus.
    ///
    /// Documents are extracted concurrently; ranking needs the whole
    /// corpus, so this awaits every extraction before returning. With
    /// `FailurePolicy::Abort` the first failure aborts the batch; with
    /// `FailurePolicy::Skip` failed documents are dropped entirely so
    /// the surviving entries keep their name/text correspondence.
    pub async fn build_corpus(
        &self,
        documents: Vec<Document>,
        progress: Option<ProgressBar>,
    ) -> Result<Vec<ExtractedResume>> {
        let mut handles = Vec::with_capacity(documents.len());

        for document in documents {
            handles.push(task::spawn_blocking(move || {
                let name = document.name.clone();
                let text = Self::extract_document(&document);
                (name, text)
            }));
        }

        let mut corpus = Vec::with_capacity(handles.len());
        for handle in handles {
            let (name, text) = handle.await.map_err(|e| {
                ResumeRankerError::TextProcessing(format!("Extraction task failed: {}", e))
            })?;

            if let Some(pb) = &progress {
                pb.inc(1);
            }

            match text {
                Ok(text) => corpus.push(ExtractedResume { name, text }),
                Err(e) => match self.failure_policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        warn!("Skipping '{}': {}", name, e);
                    }
                },
            }
        }

        Ok(corpus)
    }
}
