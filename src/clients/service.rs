//! High-level speech-to-text service abstraction.
//!
//! This trait hides the wire format from the upload pipeline: the pipeline
//! hands over media and a language hint and gets back either a transcript
//! or a classified error. Tests stub this seam to exercise the pipeline
//! without any network traffic.

use super::error::TranscriptionError;
use crate::media::{Language, UploadedMedia};

/// High-level speech-to-text service abstraction.
pub trait SpeechToTextService: Send + Sync {
    /// Transcribe the uploaded media to text.
    ///
    /// # Returns
    /// * `Ok(String)` - Non-empty transcribed text
    /// * `Err(TranscriptionError)` - Transcription failed
    fn transcribe(
        &self,
        media: &UploadedMedia,
        language: Language,
    ) -> Result<String, TranscriptionError>;
}
