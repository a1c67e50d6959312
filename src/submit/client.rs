use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;

use crate::config::EndpointConfig;
use crate::registration::FormValues;
use crate::submit::error::SubmitError;
use crate::submit::outcome::Outcome;

/// Shown when the server accepts a registration without saying anything.
const DEFAULT_SUCCESS_MESSAGE: &str = "Registration complete";

/// Posts registrations to the configured endpoint.
///
/// One call is one request: no retry, no idempotency key.
#[derive(Clone)]
pub struct RegistrationClient {
    client: Client,
    endpoint: String,
    request_timeout: Duration,
}

impl RegistrationClient {
    pub fn new(config: &EndpointConfig) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(SubmitError::Client)?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_seconds.into()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `values` and return the server's message on a 2xx response.
    pub async fn submit(&self, values: &FormValues) -> Result<String, SubmitError> {
        tracing::info!(
            endpoint = %self.endpoint,
            username = %values.username,
            "Submitting registration"
        );

        let result = match timeout(self.request_timeout, self.do_submit(values)).await {
            Ok(result) => result,
            Err(_) => Err(SubmitError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        };

        match &result {
            Ok(message) => tracing::info!(message = %message, "Registration accepted"),
            Err(err) => tracing::warn!(kind = err.kind(), "Registration failed: {}", err),
        }
        result
    }

    /// Same as [`submit`](Self::submit), folded into what the form displays.
    pub async fn outcome(&self, values: &FormValues) -> Outcome {
        Outcome::from(self.submit(values).await)
    }

    async fn do_submit(&self, values: &FormValues) -> Result<String, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(values)
            .send()
            .await
            .map_err(|source| self.connection_error(source))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| self.connection_error(source))?;

        if status.is_success() {
            return Ok(extract_message(&body).unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()));
        }

        tracing::debug!(status = status.as_u16(), body_len = body.len(), "Non-success response");
        let message = extract_message(&body)
            .unwrap_or_else(|| format!("Registration failed with status {}", status.as_u16()));
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    fn connection_error(&self, source: reqwest::Error) -> SubmitError {
        SubmitError::Connection {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

/// Pull `message` (or `error.message`) out of a JSON response body.
fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(|message| message.as_str())
        .or_else(|| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
        })
        .map(str::to_string)
}
