#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("file too large: {size_bytes} bytes (limit {limit_bytes})")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("network error: {0}")]
    Network(String),
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("API returned success but no transcript data: {body}")]
    EmptyTranscript { body: String },
    #[error("internal error: {0}")]
    Internal(String),
}

impl TranscriptionError {
    /// Returns a user-friendly error message suitable for display in the UI
    pub fn user_message(&self) -> String {
        match self {
            TranscriptionError::FileTooLarge {
                size_bytes,
                limit_bytes,
            } => {
                let mb = size_bytes / (1024 * 1024);
                let limit_mb = limit_bytes / (1024 * 1024);
                format!(
                    "Media file too large ({}MB). Maximum is {}MB.",
                    mb, limit_mb
                )
            }
            TranscriptionError::Network(_) => {
                "Network or timeout error. Check your connection and retry.".to_string()
            }
            TranscriptionError::Api { status, .. } => match status {
                401 | 403 => format!(
                    "Transcription failed (status {}): invalid API key. Check your credentials.",
                    status
                ),
                400 => format!(
                    "Transcription failed (status {}): the request was rejected. \
                     Check that a supported language was selected.",
                    status
                ),
                _ => format!("Transcription failed: API returned status {}.", status),
            },
            TranscriptionError::EmptyTranscript { .. } => {
                "The provider returned no transcript for this file.".to_string()
            }
            TranscriptionError::Internal(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_message_reports_sizes() {
        let err = TranscriptionError::FileTooLarge {
            size_bytes: 300 * 1024 * 1024,
            limit_bytes: 200 * 1024 * 1024,
        };
        let msg = err.user_message();
        assert!(msg.contains("300MB"));
        assert!(msg.contains("200MB"));
    }

    #[test]
    fn test_unauthorized_message_hints_at_credentials() {
        let err = TranscriptionError::Api {
            status: 401,
            body: "{\"error\":\"unauthorized\"}".to_string(),
        };
        let msg = err.user_message();
        assert!(msg.contains("401"));
        assert!(msg.contains("API key"));
    }

    #[test]
    fn test_bad_request_message_hints_at_language() {
        let err = TranscriptionError::Api {
            status: 400,
            body: "missing language".to_string(),
        };
        assert!(err.user_message().contains("language"));
    }

    #[test]
    fn test_internal_message_hides_details() {
        let err = TranscriptionError::Internal("expected value at line 1".to_string());
        assert!(!err.user_message().contains("line 1"));
    }
}
