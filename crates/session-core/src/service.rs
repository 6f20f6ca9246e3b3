use std::future::Future;

use dia_analyze_interface::{AnalyzeRequest, AnalyzeResponse, SubmitFailure};

use crate::result::AnalysisResult;
use crate::session::{AnalysisSession, SubmitRejected};

/// The submit contract the session drives. The session never sees a socket
/// or a status line; implementations reduce whatever happened on the wire to
/// a response or a [`SubmitFailure`].
pub trait AnalyzeService: Send + Sync {
    fn submit(
        &self,
        request: AnalyzeRequest,
    ) -> impl Future<Output = Result<AnalyzeResponse, SubmitFailure>> + Send;
}

/// Drive one full submission cycle: begin (validation + reset), submit,
/// normalize the response into an [`AnalysisResult`], complete. The final
/// state is read from the session afterwards.
pub async fn run_submission<S: AnalyzeService>(
    session: &mut AnalysisSession,
    service: &S,
    request: AnalyzeRequest,
) -> Result<(), SubmitRejected> {
    let ticket = session.begin_submit(Some(&request.audio.file_name))?;

    let file_name = request.audio.file_name.clone();
    let reference_file_name = request.reference.as_ref().map(|f| f.file_name.clone());

    let outcome = service.submit(request).await.map(|response| {
        AnalysisResult::from_response(file_name, reference_file_name, response)
    });
    session.complete(ticket, outcome);

    Ok(())
}
