//! Mediascribe: upload an audio/video file, transcribe it through the
//! ApyHub speech-to-text API, and render the transcript with a fixed
//! summary notice.

pub mod clients;
pub mod config;
pub mod formatter;
pub mod media;
pub mod mime;
pub mod pipeline;

pub use clients::{
    ApiTranscriber, ApyHubClient, SpeechToTextService, TranscriptionClient, TranscriptionError,
};
pub use config::{ConfigError, Settings};
pub use formatter::DisplayDocument;
pub use media::{Language, UploadedMedia};
pub use pipeline::UploadPipeline;
