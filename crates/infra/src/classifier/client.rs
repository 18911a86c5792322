/// Client for the email classification service
use async_trait::async_trait;
use mailtriage_core::{ClassificationGateway, FeedbackGateway, HealthProbe, StatusLookup};
use mailtriage_domain::constants::{
    FEEDBACK_PATH, FILE_FIELD, HEALTH_PATH, PROCESS_PATH, STATUS_PATH, TEXT_FIELD,
};
use mailtriage_domain::{
    AnalysisInput, AnalysisResult, ApiConfig, FeedbackSubmission, HealthReport, SelectedFile,
    StatusReport, TransportError, TriageError,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use super::types::parse_detail;
use crate::errors::transport_error;
use crate::http::HttpClient;

/// HTTP adapter for every classification service endpoint
#[derive(Clone)]
pub struct ClassifierClient {
    http_client: HttpClient,
    base_url: Url,
}

impl ClassifierClient {
    /// Create a client for the service at `base_url` (e.g. `http://localhost:8000`).
    ///
    /// # Errors
    /// Returns `TriageError::Config` when `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str, http_client: HttpClient) -> Result<Self, TriageError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self { http_client, base_url })
    }

    /// Build the HTTP client and service client from configuration.
    pub fn from_config(api: &ApiConfig) -> Result<Self, TriageError> {
        let mut builder = HttpClient::builder();
        if let Some(secs) = api.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        if let Some(agent) = &api.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Self::new(&api.base_url, builder.build()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /api/process` with a `file` or a `text` multipart field.
    pub async fn process_input(
        &self,
        input: &AnalysisInput,
    ) -> Result<AnalysisResult, TransportError> {
        let form = match input {
            AnalysisInput::File(file) => Form::new().part(FILE_FIELD, file_part(file)?),
            AnalysisInput::Text(text) => Form::new().text(TEXT_FIELD, text.clone()),
        };

        debug!(mode = %input.mode(), "Posting email for classification");
        let request =
            self.http_client.request(Method::POST, self.endpoint(PROCESS_PATH)).multipart(form);
        let response = self.http_client.send(request).await?;
        decode_json(response).await
    }

    /// `POST /api/feedback`; any 2xx is success and the body is ignored.
    pub async fn post_feedback(&self, feedback: &FeedbackSubmission) -> Result<(), TransportError> {
        let request =
            self.http_client.request(Method::POST, self.endpoint(FEEDBACK_PATH)).json(feedback);
        let response = self.http_client.send(request).await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        info!(analysis_id = %feedback.analysis_id, "Feedback accepted by service");
        Ok(())
    }

    /// `GET /health`
    pub async fn fetch_health(&self) -> Result<HealthReport, TransportError> {
        let request = self.http_client.request(Method::GET, self.endpoint(HEALTH_PATH));
        let response = self.http_client.send(request).await?;
        decode_json(response).await
    }

    /// `GET /api/status/{id}`
    pub async fn fetch_status(&self, analysis_id: &str) -> Result<StatusReport, TransportError> {
        let mut url = self.endpoint(STATUS_PATH);
        url.path_segments_mut()
            .map_err(|_| TransportError::Network("base URL cannot carry a path".into()))?
            .push(analysis_id);

        let request = self.http_client.request(Method::GET, url);
        let response = self.http_client.send(request).await?;
        decode_json(response).await
    }

    /// `path` appended to the base URL, keeping any base path prefix.
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", self.base_url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }
}

fn parse_base_url(raw: &str) -> Result<Url, TriageError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| TriageError::Config(format!("Invalid API base URL '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(TriageError::Config(format!("API base URL must be http(s) with a host: {raw}"))),
    }
}

/// Multipart part carrying the file bytes, name and content type.
fn file_part(file: &SelectedFile) -> Result<Part, TransportError> {
    let mime = file
        .mime_hint
        .clone()
        .unwrap_or_else(|| mime_guess::from_path(&file.name).first_or_octet_stream().to_string());

    Part::bytes(file.content.clone())
        .file_name(file.name.clone())
        .mime_str(&mime)
        .map_err(|e| TransportError::Network(format!("invalid content type '{mime}': {e}")))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    let body = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
}

async fn error_from_response(response: Response) -> TransportError {
    let status = response.status().as_u16();
    let detail = response.text().await.ok().and_then(|body| parse_detail(&body));
    debug!(status, detail = ?detail, "Service returned an error status");
    TransportError::Status { status, detail }
}

#[async_trait]
impl ClassificationGateway for ClassifierClient {
    async fn process(&self, input: &AnalysisInput) -> Result<AnalysisResult, TransportError> {
        self.process_input(input).await
    }
}

#[async_trait]
impl FeedbackGateway for ClassifierClient {
    async fn submit_feedback(&self, feedback: &FeedbackSubmission) -> Result<(), TransportError> {
        self.post_feedback(feedback).await
    }
}

#[async_trait]
impl HealthProbe for ClassifierClient {
    async fn check_health(&self) -> Result<HealthReport, TransportError> {
        self.fetch_health().await
    }
}

#[async_trait]
impl StatusLookup for ClassifierClient {
    async fn status(&self, analysis_id: &str) -> Result<StatusReport, TransportError> {
        self.fetch_status(analysis_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ClassifierClient {
        ClassifierClient::new(base, HttpClient::new().expect("http client")).expect("client")
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        assert_eq!(
            client("http://localhost:8000").endpoint(PROCESS_PATH).as_str(),
            "http://localhost:8000/api/process"
        );
        assert_eq!(
            client("https://example.com/triage/").endpoint(HEALTH_PATH).as_str(),
            "https://example.com/triage/health"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        for raw in ["localhost:8000", "ftp://example.com", "not a url", ""] {
            let result = ClassifierClient::new(raw, HttpClient::new().expect("http client"));
            assert!(matches!(result, Err(TriageError::Config(_))), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn file_part_falls_back_to_guessed_mime() {
        let file = SelectedFile::new("scan.pdf", b"%PDF-1.4".to_vec());
        assert!(file_part(&file).is_ok());

        let bad = SelectedFile::new("mail.txt", Vec::new()).with_mime_hint("not a mime");
        assert!(matches!(file_part(&bad), Err(TransportError::Network(_))));
    }
}
