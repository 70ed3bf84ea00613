//! Upload pipeline: validate, resolve, transcribe, format.

use log::{debug, warn};

use crate::clients::{ApiTranscriber, ApyHubClient, SpeechToTextService, TranscriptionError};
use crate::config::Settings;
use crate::formatter::DisplayDocument;
use crate::media::{Language, UploadedMedia};

/// Orchestrates one upload from validation to the rendered document.
///
/// A single linear pass per invocation: size check, MIME resolution, one
/// transcription call, formatting. Safe to invoke again from scratch; a
/// failed attempt restarts at the size check.
pub struct UploadPipeline {
    service: Box<dyn SpeechToTextService>,
    max_upload_bytes: u64,
}

impl UploadPipeline {
    pub fn new(service: Box<dyn SpeechToTextService>, max_upload_bytes: u64) -> Self {
        Self {
            service,
            max_upload_bytes,
        }
    }

    /// Build the production pipeline from startup settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let client = ApyHubClient::new(settings.api_key.clone(), settings.endpoint.clone());
        let transcriber = ApiTranscriber::new(Box::new(client), settings.timeout);
        Self::new(Box::new(transcriber), settings.max_upload_bytes)
    }

    /// Process one uploaded file.
    ///
    /// # Returns
    /// * `Ok(DisplayDocument)` - Transcript plus the fixed summary notice
    /// * `Err(TranscriptionError)` - Classified failure, ready for display
    pub fn process(
        &self,
        media: &UploadedMedia,
        language: Language,
    ) -> Result<DisplayDocument, TranscriptionError> {
        let size_bytes = media.byte_len();
        if size_bytes > self.max_upload_bytes {
            warn!(
                "Upload rejected: {} bytes > {} bytes limit",
                size_bytes, self.max_upload_bytes
            );
            return Err(TranscriptionError::FileTooLarge {
                size_bytes,
                limit_bytes: self.max_upload_bytes,
            });
        }

        debug!(
            "Processing {} ({} bytes, {}, language {})",
            media.filename(),
            size_bytes,
            media.mime_type(),
            language
        );

        let transcript = self.service.transcribe(media, language)?;

        Ok(DisplayDocument::new(transcript))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // Deterministic stand-in for the HTTP transcriber. The call counter is
    // shared so tests can assert that validation short-circuits before any
    // call is made.
    struct StubService {
        transcript: Option<String>,
        calls: Arc<AtomicUsize>,
    }

    impl StubService {
        fn returning(transcript: &str) -> Self {
            Self {
                transcript: Some(transcript.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                transcript: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn call_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }
    }

    impl SpeechToTextService for StubService {
        fn transcribe(
            &self,
            _media: &UploadedMedia,
            _language: Language,
        ) -> Result<String, TranscriptionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.transcript {
                Some(text) => Ok(text.clone()),
                None => Err(TranscriptionError::EmptyTranscript {
                    body: "{}".to_string(),
                }),
            }
        }
    }

    fn media_of_size(len: usize) -> UploadedMedia {
        UploadedMedia::new(vec![0u8; len], "meeting.mp3", None)
    }

    #[test]
    fn test_oversized_upload_rejected_without_service_call() {
        let service = StubService::returning("never seen");
        let calls = service.call_counter();
        let pipeline = UploadPipeline::new(Box::new(service), 1024);

        let result = pipeline.process(&media_of_size(2048), Language::EnUs);

        assert!(matches!(
            result,
            Err(TranscriptionError::FileTooLarge {
                size_bytes: 2048,
                limit_bytes: 1024,
            })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_successful_upload_renders_document() {
        let pipeline = UploadPipeline::new(Box::new(StubService::returning("hello world")), 1024);

        let doc = pipeline.process(&media_of_size(16), Language::EnUs).unwrap();

        assert_eq!(doc.transcript(), "hello world");
        let rendered = doc.render();
        assert!(rendered.contains("hello world"));
        assert!(rendered.contains("Summarization is not implemented"));
    }

    #[test]
    fn test_service_failure_propagates() {
        let pipeline = UploadPipeline::new(Box::new(StubService::failing()), 1024);

        let result = pipeline.process(&media_of_size(16), Language::FrFr);

        assert!(matches!(
            result,
            Err(TranscriptionError::EmptyTranscript { .. })
        ));
    }

    #[test]
    fn test_process_is_idempotent() {
        let pipeline = UploadPipeline::new(Box::new(StubService::returning("stable")), 1024);
        let media = media_of_size(16);

        let first = pipeline.process(&media, Language::MyMm).unwrap();
        let second = pipeline.process(&media, Language::MyMm).unwrap();

        assert_eq!(first.render(), second.render());
    }

    #[test]
    fn test_boundary_size_accepted() {
        let pipeline = UploadPipeline::new(Box::new(StubService::returning("fits")), 1024);

        let result = pipeline.process(&media_of_size(1024), Language::EnUs);

        assert!(result.is_ok());
    }
}
