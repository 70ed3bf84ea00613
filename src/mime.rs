//! MIME type resolution for uploaded media.
//!
//! Browsers (and some upload widgets) report `application/octet-stream` for
//! anything they don't recognize, so the declared type alone is not enough
//! to tag the file part sent to the transcription API.

use std::path::Path;

/// Generic fallback for unknown content.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Resolve the MIME type for an uploaded file.
///
/// A declared type is trusted as-is unless it is missing, empty, or the
/// generic octet-stream fallback; in those cases the filename extension
/// decides. Unknown extensions map back to the generic fallback.
pub fn resolve(reported_type: Option<&str>, filename: &str) -> String {
    if let Some(reported) = reported_type {
        if !reported.is_empty() && !reported.contains("octet-stream") {
            return reported.to_string();
        }
    }

    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let mime = match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "m4a" => "audio/m4a",
        "ogg" => "audio/ogg",
        _ => FALLBACK_MIME,
    };

    mime.to_string()
}
