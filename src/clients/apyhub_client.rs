use secrecy::{ExposeSecret, SecretString};

use super::client::TranscriptionClient;
use super::error::TranscriptionError;
use crate::media::{Language, UploadedMedia};

/// ApyHub speech-to-text API client
///
/// ApyHub authenticates with a custom `apy-token` header rather than a
/// Bearer scheme, and expects the media under a `file` multipart field.
pub struct ApyHubClient {
    api_key: SecretString,
    endpoint: String,
}

impl ApyHubClient {
    pub fn new(api_key: SecretString, endpoint: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
        }
    }
}

impl TranscriptionClient for ApyHubClient {
    fn transcription_url(&self) -> String {
        self.endpoint.clone()
    }

    fn add_auth(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        request.header("apy-token", self.api_key.expose_secret())
    }

    fn build_form(
        &self,
        media: &UploadedMedia,
        language: Language,
    ) -> Result<reqwest::blocking::multipart::Form, TranscriptionError> {
        let file_part = reqwest::blocking::multipart::Part::bytes(media.content().to_vec())
            .file_name(media.filename().to_string())
            .mime_str(&media.mime_type())
            .map_err(|e| {
                TranscriptionError::Internal(format!("Failed to create file part: {}", e))
            })?;

        let form = reqwest::blocking::multipart::Form::new()
            .part("file", file_part)
            .text("language", language.to_string());

        Ok(form)
    }
}
