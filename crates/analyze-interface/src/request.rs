/// One file selected for upload: the bytes plus the metadata the multipart
/// part needs.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// One analysis submission: the audio recording, plus an optional RTTM
/// reference file for server-side scoring. When `reference` is `None` the
/// `rttm_file` part is omitted from the request entirely, never sent empty.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub audio: FileUpload,
    pub reference: Option<FileUpload>,
}

impl AnalyzeRequest {
    pub fn new(audio: FileUpload) -> Self {
        Self {
            audio,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: FileUpload) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// Why a submission did not produce an [`crate::AnalyzeResponse`].
///
/// `Service` means the service answered with a non-success status; `detail`
/// carries its reported reason when the body had one. `Transport` means the
/// request never completed (connectivity, malformed response body).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitFailure {
    #[error("analysis service returned status {status}")]
    Service { status: u16, detail: Option<String> },

    #[error("transport failure: {message}")]
    Transport { message: String },
}
