/// One transcribed word with timing and speaker attribution, as delivered in
/// the service's `timeline_data` array.
///
/// Words arrive in non-decreasing `start` order; nothing downstream re-sorts
/// them. A missing or `null` speaker means the diarizer could not attribute
/// the word.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordToken {
    pub text: String,
    #[serde(default)]
    pub speaker: Option<String>,
    pub start: f64,
    pub end: f64,
}

/// Success body of the `/upload` endpoint.
///
/// Field defaults implement the normalization contract: `duration` falls back
/// to `0`, the metric fields and `language` stay `None` when absent, and a
/// missing `timeline_data` reads as an empty timeline. `der` and its
/// component metrics are jointly present only when the upload included a
/// reference file the service could score against.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub der: Option<f64>,
    #[serde(default)]
    pub speaker_error: Option<f64>,
    #[serde(default)]
    pub missed_speech: Option<f64>,
    #[serde(default)]
    pub false_alarm: Option<f64>,
    #[serde(default)]
    pub timeline_data: Vec<WordToken>,
}

/// Error body the service attaches to non-2xx responses. `detail` is the
/// human-readable reason and may be absent.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
