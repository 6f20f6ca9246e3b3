use dia_analyze_interface::SubmitFailure;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("analysis service returned status {status}")]
    Service { status: u16, detail: Option<String> },
}

impl Error {
    /// Reduce to the session-facing failure taxonomy: a service-reported
    /// rejection keeps its status and detail, everything else is transport.
    pub fn into_failure(self) -> SubmitFailure {
        match self {
            Error::Service { status, detail } => SubmitFailure::Service { status, detail },
            Error::Http(err) => SubmitFailure::Transport {
                message: err.to_string(),
            },
        }
    }
}
