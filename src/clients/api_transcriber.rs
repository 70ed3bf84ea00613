//! API-based speech-to-text service implementation.
//!
//! Sends one multipart request per invocation and classifies every failure;
//! retry policy, if any ever exists, belongs to the caller.

use std::time::Duration;

use log::{error, info};
use serde::Deserialize;

use super::client::TranscriptionClient;
use super::error::TranscriptionError;
use super::service::SpeechToTextService;
use crate::media::{Language, UploadedMedia};

/// Response body of the ApyHub speech-to-text endpoint.
///
/// The transcript arrives either as `{"data": "..."}` or nested as
/// `{"data": {"text": "..."}}` depending on the output options; both shapes
/// must be accepted.
#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    #[serde(default)]
    data: serde_json::Value,
}

impl TranscriptResponse {
    fn transcript(&self) -> Option<&str> {
        match &self.data {
            serde_json::Value::String(s) => Some(s.as_str()),
            serde_json::Value::Object(map) => map.get("text").and_then(|v| v.as_str()),
            _ => None,
        }
    }
}

/// API-based speech-to-text service.
pub struct ApiTranscriber {
    client: Box<dyn TranscriptionClient>,
    timeout: Duration,
}

impl ApiTranscriber {
    /// Create a new API transcriber with the given client.
    ///
    /// `timeout` is the hard upper bound on the whole round-trip; long
    /// recordings can legitimately take minutes to transcribe.
    pub fn new(client: Box<dyn TranscriptionClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Send the request and parse the response into a transcript.
    fn send_and_parse(
        &self,
        form: reqwest::blocking::multipart::Form,
    ) -> Result<String, TranscriptionError> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                TranscriptionError::Internal(format!("Failed to build HTTP client: {}", e))
            })?;

        let request = http_client.post(self.client.transcription_url());
        let request = self.client.add_auth(request);

        let response = request.multipart(form).send().map_err(|e| {
            error!("API request error: {}", e);
            if e.is_timeout() {
                TranscriptionError::Network(format!(
                    "Request timed out after {} seconds",
                    self.timeout.as_secs()
                ))
            } else {
                TranscriptionError::Network(format!("Request failed: {}", e))
            }
        })?;

        // Check response status
        let status = response.status();
        let body = response.text().map_err(|e| {
            error!("Failed to read response body: {}", e);
            TranscriptionError::Network(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            error!("API error response ({}): {}", status, body);
            return Err(TranscriptionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // Parse JSON response
        let parsed: TranscriptResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response: {}", e);
            TranscriptionError::Internal(format!("Failed to parse response: {}", e))
        })?;

        // Raw body is kept for diagnostics when the provider answers 200
        // without a usable transcript.
        match parsed.transcript() {
            Some(text) if !text.is_empty() => {
                info!("Transcription successful: {} characters", text.len());
                Ok(text.to_string())
            }
            _ => {
                error!("API returned success but no transcript data: {}", body);
                Err(TranscriptionError::EmptyTranscript { body })
            }
        }
    }
}

impl SpeechToTextService for ApiTranscriber {
    fn transcribe(
        &self,
        media: &UploadedMedia,
        language: Language,
    ) -> Result<String, TranscriptionError> {
        let form = self.client.build_form(media, language)?;
        self.send_and_parse(form)
    }
}
