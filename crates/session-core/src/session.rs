use dia_analyze_interface::SubmitFailure;

use crate::result::AnalysisResult;
use crate::state::RequestState;

pub const VALIDATION_MESSAGE: &str = "Select an audio file first.";
pub const GENERIC_FAILURE_MESSAGE: &str = "File upload and analysis failed.";

/// A submit attempt that was rejected before any network activity. The
/// session state is untouched; only the message is surfaced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SubmitRejected {
    pub message: String,
}

/// Identifies one accepted submission. Captured at submit time and presented
/// back with the outcome; only the ticket matching the session's current
/// generation may resolve the `Submitting` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// What `complete` did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Lifecycle state machine for analysis submissions.
///
/// Single writer, any number of state readers. There is no cancellation: a
/// superseded request stays in flight, and its late outcome is recognized by
/// its stale ticket and discarded rather than overwriting newer state. The
/// generation counter is monotonic, so "newest submission wins" holds
/// regardless of response arrival order.
#[derive(Debug)]
pub struct AnalysisSession {
    state: RequestState,
    generation: u64,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Start a submission. `None` or an empty file name is the rejected
    /// transition: no state change, no network call, just the validation
    /// message. Otherwise any previous result is discarded and the state
    /// becomes `Submitting`.
    pub fn begin_submit(
        &mut self,
        audio_file_name: Option<&str>,
    ) -> Result<RequestTicket, SubmitRejected> {
        let Some(file_name) = audio_file_name.filter(|name| !name.is_empty()) else {
            return Err(SubmitRejected {
                message: VALIDATION_MESSAGE.to_string(),
            });
        };

        self.generation += 1;
        self.state = RequestState::Submitting {
            file_name: file_name.to_string(),
        };

        tracing::debug!(file = %file_name, generation = self.generation, "submission_started");
        Ok(RequestTicket(self.generation))
    }

    /// Resolve a submission. Outcomes whose ticket is not the current
    /// generation, or that arrive after the current submission already
    /// resolved, are discarded silently.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<AnalysisResult, SubmitFailure>,
    ) -> Completion {
        if ticket.0 != self.generation || !self.state.is_submitting() {
            tracing::warn!(
                ticket = ticket.0,
                generation = self.generation,
                "stale_response_discarded"
            );
            return Completion::Stale;
        }

        self.state = match outcome {
            Ok(result) => {
                tracing::debug!(file = %result.file_name, "submission_succeeded");
                RequestState::Succeeded(result)
            }
            Err(failure) => {
                let message = failure_message(&failure);
                tracing::debug!(%message, "submission_failed");
                RequestState::Failed { message }
            }
        };

        Completion::Applied
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the user-facing failure text: the service's own `detail` when it
/// reported one, a generic message otherwise, and a connection hint for
/// transport failures.
fn failure_message(failure: &SubmitFailure) -> String {
    match failure {
        SubmitFailure::Service {
            detail: Some(detail),
            ..
        } => detail.clone(),
        SubmitFailure::Service { detail: None, .. } => GENERIC_FAILURE_MESSAGE.to_string(),
        SubmitFailure::Transport { message } => {
            format!("Connection error: {message}. Check that the analysis service is running.")
        }
    }
}
