mod api_transcriber;
mod apyhub_client;
mod client;
mod error;
mod service;

// Re-export public types
pub use api_transcriber::ApiTranscriber;
pub use apyhub_client::ApyHubClient;
pub use client::TranscriptionClient;
pub use error::TranscriptionError;
pub use service::SpeechToTextService;
