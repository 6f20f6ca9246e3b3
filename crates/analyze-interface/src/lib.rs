pub mod request;
pub mod response;

pub use request::{AnalyzeRequest, FileUpload, SubmitFailure};
pub use response::{AnalyzeResponse, ErrorBody, WordToken};
