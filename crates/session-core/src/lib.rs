pub mod result;
pub mod service;
pub mod session;
pub mod state;

pub use result::AnalysisResult;
pub use service::{AnalyzeService, run_submission};
pub use session::{AnalysisSession, Completion, RequestTicket, SubmitRejected};
pub use state::RequestState;
