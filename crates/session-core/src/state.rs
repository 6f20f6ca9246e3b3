use crate::result::AnalysisResult;

/// Lifecycle of the current analysis request. Exactly one variant is active;
/// the session owns at most one [`AnalysisResult`] (the most recent), and a
/// new submission replaces the whole state before its response arrives, so a
/// stale result is never visible alongside a pending request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Submitting { file_name: String },
    Succeeded(AnalysisResult),
    Failed { message: String },
}

impl RequestState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}
