//! Uploaded media and language selection types.

use crate::mime;

/// Extensions accepted by the upload boundary.
///
/// Mirrors the provider's supported audio/video container formats; anything
/// outside this list is rejected before a byte is read.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "wav", "mp3", "m4a", "mkv", "avi", "flv", "wmv", "ogg", "flac", "webm",
];

/// Returns true if the filename carries one of the allowed media extensions.
pub fn has_allowed_extension(filename: &str) -> bool {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let ext = e.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Language hint sent with every transcription request (BCP-47 tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
pub enum Language {
    #[default]
    #[strum(serialize = "en-US")]
    EnUs,
    #[strum(serialize = "my-MM")]
    MyMm,
    #[strum(serialize = "es-ES")]
    EsEs,
    #[strum(serialize = "fr-FR")]
    FrFr,
}

/// A single uploaded audio/video file.
///
/// Owns its bytes for the lifetime of one transcription request; nothing is
/// shared between requests and nothing outlives the request that created it.
#[derive(Debug, Clone)]
pub struct UploadedMedia {
    content: Vec<u8>,
    filename: String,
    content_type: Option<String>,
}

impl UploadedMedia {
    pub fn new(content: Vec<u8>, filename: impl Into<String>, content_type: Option<String>) -> Self {
        Self {
            content,
            filename: filename.into(),
            content_type,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn byte_len(&self) -> u64 {
        self.content.len() as u64
    }

    /// The MIME type to tag the file part with.
    ///
    /// Falls back to extension sniffing when the declared type is missing or
    /// the generic octet-stream placeholder.
    pub fn mime_type(&self) -> String {
        mime::resolve(self.content_type.as_deref(), &self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(has_allowed_extension("meeting.mp4"));
        assert!(has_allowed_extension("interview.FLAC"));
        assert!(has_allowed_extension("song.webm"));
        assert!(!has_allowed_extension("notes.txt"));
        assert!(!has_allowed_extension("no_extension"));
    }

    #[test]
    fn test_language_tags_round_trip() {
        for tag in ["en-US", "my-MM", "es-ES", "fr-FR"] {
            let lang: Language = tag.parse().unwrap();
            assert_eq!(lang.to_string(), tag);
        }
        assert!("de-DE".parse::<Language>().is_err());
    }

    #[test]
    fn test_media_mime_resolution() {
        let media = UploadedMedia::new(vec![0u8; 4], "talk.mp3", None);
        assert_eq!(media.mime_type(), "audio/mpeg");

        let media = UploadedMedia::new(vec![0u8; 4], "talk.mp3", Some("audio/flac".into()));
        assert_eq!(media.mime_type(), "audio/flac");
    }

    #[test]
    fn test_byte_len() {
        let media = UploadedMedia::new(vec![0u8; 1024], "a.wav", None);
        assert_eq!(media.byte_len(), 1024);
    }
}
