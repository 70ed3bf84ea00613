//! Rendering of a transcript into the displayed result document.

/// Fixed notice shown in place of a generated summary.
///
/// Summarization needs a second AI call that this tool does not make; the
/// notice tells the user to run the transcript through a separate tool.
const SUMMARY_PLACEHOLDER: &str = "* **NOTE:** Summarization is not implemented. \
Copy the transcript above and submit it to a separate text summarization tool.";

/// The rendered result of a successful transcription.
///
/// Purely derived from the transcript; two documents built from the same
/// transcript render identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDocument {
    transcript: String,
}

impl DisplayDocument {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Render the document as markdown: the full transcript followed by the
    /// fixed summary placeholder.
    pub fn render(&self) -> String {
        format!(
            "## Full Transcript\n{}\n\n## Key Point Summary\n{}",
            self.transcript, SUMMARY_PLACEHOLDER
        )
    }
}
