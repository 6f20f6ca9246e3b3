mod error;

pub use error::Error;

use std::time::Duration;

use dia_analyze_interface::{AnalyzeRequest, AnalyzeResponse, ErrorBody, FileUpload, SubmitFailure};
use dia_session_core::AnalyzeService;

/// HTTP client for the analysis service's `/upload` endpoint.
///
/// One multipart POST per submission: the required `audio_file` part plus an
/// optional `rttm_file` reference part, which is left out of the form
/// entirely when the caller supplied none.
pub struct AnalyzeClient {
    api_base: String,
    http: reqwest::Client,
}

impl AnalyzeClient {
    pub fn builder() -> AnalyzeClientBuilder {
        AnalyzeClientBuilder::default()
    }

    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse, Error> {
        let url = format!("{}/upload", self.api_base.trim_end_matches('/'));

        let mut form =
            reqwest::multipart::Form::new().part("audio_file", file_part(request.audio)?);
        if let Some(reference) = request.reference {
            form = form.part("rttm_file", file_part(reference)?);
        }

        tracing::debug!(url = %url, "analyze_request");
        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Prefer the service's own `detail`; any unparsable body just
            // means no detail is available.
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);

            tracing::warn!(status = status.as_u16(), detail = ?detail, "analyze_request_rejected");
            return Err(Error::Service {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json::<AnalyzeResponse>().await?)
    }
}

impl AnalyzeService for AnalyzeClient {
    async fn submit(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse, SubmitFailure> {
        self.analyze(request).await.map_err(Error::into_failure)
    }
}

fn file_part(file: FileUpload) -> Result<reqwest::multipart::Part, Error> {
    let part = reqwest::multipart::Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str(&file.content_type)?;
    Ok(part)
}

#[derive(Default)]
pub struct AnalyzeClientBuilder {
    api_base: Option<String>,
    timeout: Option<Duration>,
}

impl AnalyzeClientBuilder {
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> AnalyzeClient {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        AnalyzeClient {
            api_base: self.api_base.expect("api_base is required"),
            http: http.build().expect("failed to build http client"),
        }
    }
}
