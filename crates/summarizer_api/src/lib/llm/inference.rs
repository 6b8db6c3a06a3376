use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use crate::{error::SummarizeError, GenerationParams, Summarizer, SummaryCandidate};

/// Client for a hosted text2text summarization model.
///
/// Speaks the inference-endpoint dialect: the input goes in `inputs`, the
/// generation bounds in `parameters`, and the reply is a list of
/// `{"summary_text": ...}` candidates.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    endpoint: Url,
    token: Option<String>,
    model_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

impl InferenceClient {
    pub const DEFAULT_MODEL_NAME: &str = "fine_tuned_summarizer";

    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, InferenceError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            token: None,
            model_name: Self::DEFAULT_MODEL_NAME.into(),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[tracing::instrument(skip(self, text), fields(model = %self.model_name, input_len = text.len()))]
    pub async fn send_summarize_request(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<SummaryCandidate>, InferenceError> {
        let mut request = self.client.post(self.endpoint.clone()).json(&InferenceRequest {
            inputs: text,
            parameters: params,
        });

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status,
                message: error_message(&body),
            });
        }

        Ok(resp.json::<Vec<SummaryCandidate>>().await?)
    }
}

/// Pulls the human readable message out of an error body.
///
/// Inference servers answer `{"error": "..."}` or `{"error": ["...", ...]}`;
/// anything else is passed through trimmed.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();

    match parsed.as_ref().map(|v| &v["error"]) {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(serde_json::Value::Array(messages)) => messages
            .iter()
            .filter_map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join("; "),
        _ => body.trim().to_string(),
    }
}

impl From<InferenceError> for SummarizeError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Request(e) if e.is_timeout() || e.is_connect() => {
                SummarizeError::BackendUnavailable(e.to_string())
            }
            InferenceError::Request(e) => SummarizeError::Internal(e.to_string()),
            InferenceError::Api { status, message } => {
                let message = if message.is_empty() {
                    format!("model endpoint returned status {status}")
                } else {
                    message
                };
                match status {
                    400 | 413 | 422 => SummarizeError::InvalidInput(message),
                    429 | 502 | 503 | 504 => SummarizeError::BackendUnavailable(message),
                    _ => SummarizeError::Internal(message),
                }
            }
        }
    }
}

impl Summarizer for InferenceClient {
    type Error = InferenceError;

    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<SummaryCandidate>, Self::Error> {
        self.send_summarize_request(text, params)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))
    }
}
