//! Client for the classification endpoint

use crate::constants::{CLASSIFY_PATH, REQUEST_FAILED};
use crate::types::{ClassificationRequest, ClassificationResponse, ErrorBody};
use std::time::Duration;
use tracing::{debug, warn};

/// Failure of a single classification request.
///
/// `Display` is the message shown after `Error: ` in the status line.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// Non-2xx status; message is the server's `error` field or a fallback
    #[error("{message}")]
    Request { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Json(String),
    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Clone)]
pub struct ClassifyClient {
    client: reqwest::Client,
    url: String,
}

impl ClassifyClient {
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self, ClassifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: endpoint_url(server_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one POST and decode the result. Never retries.
    pub async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResponse, ClassifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;
        debug!(status = %status, bytes = body.len(), "Classification response received");

        if !status.is_success() {
            let message = server_error_message(&body);
            warn!(status = status.as_u16(), error = %message, "Classification request rejected");
            return Err(ClassifyError::Request {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClassifyError::Json(e.to_string()))
    }
}

/// `{server_url}/api/classify`, tolerating a trailing slash on the base
pub fn endpoint_url(server_url: &str) -> String {
    format!("{}{}", server_url.trim().trim_end_matches('/'), CLASSIFY_PATH)
}

fn server_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| REQUEST_FAILED.to_string())
}
