use dia_analyze_interface::AnalyzeResponse;
use dia_segmenter::{Segment, segment, unique_speakers};

/// Everything one completed analysis produced, normalized for rendering.
///
/// Constructed whole from the service response and never mutated; the next
/// submission builds a fresh one. The metric fields are jointly present only
/// when the service scored the upload against a reference file.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnalysisResult {
    pub file_name: String,
    pub reference_file_name: Option<String>,
    pub duration: f64,
    pub language: String,
    pub der: Option<f64>,
    pub speaker_error: Option<f64>,
    pub missed_speech: Option<f64>,
    pub false_alarm: Option<f64>,
    pub speakers: Vec<String>,
    pub segments: Vec<Segment>,
}

impl AnalysisResult {
    /// Normalize a service response: default the language, run the
    /// segmentation engine over the timeline, and collect the speaker list.
    pub fn from_response(
        file_name: impl Into<String>,
        reference_file_name: Option<String>,
        response: AnalyzeResponse,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            reference_file_name,
            duration: response.duration,
            language: response
                .language
                .unwrap_or_else(|| "Unknown".to_string()),
            der: response.der,
            speaker_error: response.speaker_error,
            missed_speech: response.missed_speech,
            false_alarm: response.false_alarm,
            speakers: unique_speakers(&response.timeline_data),
            segments: segment(&response.timeline_data),
        }
    }

    /// Whether DER metrics are available for display.
    pub fn has_metrics(&self) -> bool {
        self.der.is_some()
    }
}
