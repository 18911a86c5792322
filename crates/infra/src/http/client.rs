use std::time::Duration;

use mailtriage_domain::{TransportError, TriageError};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::{transport_error, InfraError};

/// Thin HTTP client with optional timeout and request logging.
///
/// Requests are sent exactly once. Multipart bodies cannot be replayed, and
/// the classification endpoint is not idempotent.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration (no timeout).
    pub fn new() -> Result<Self, TriageError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    ///
    /// Only transport failures are errors; non-2xx responses are returned for
    /// the caller to interpret.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, TransportError> {
        let request = builder.build().map_err(transport_error)?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(transport_error(err))
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    /// Bound every request; unset means wait indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, TriageError> {
        let mut builder = ReqwestClient::builder().no_proxy();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let agent = self
            .user_agent
            .unwrap_or_else(|| concat!("mailtriage/", env!("CARGO_PKG_VERSION")).to_string());
        builder = builder.user_agent(agent);

        let client = builder.build().map_err(|err| TriageError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
