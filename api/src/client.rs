use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{AnalysisRequest, AnalysisResult, DecodeError};

pub const DEFAULT_ANALYSIS_ENDPOINT: &str = "http://localhost:3000/api/analyze-field";

/// Longest slice of an error body kept for display.
const MAX_BODY_DETAIL: usize = 512;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("could not reach the analysis service: {0}")]
    Transport(String),
    #[error("analysis service answered HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("analysis response was rejected: {0}")]
    Decode(#[from] DecodeError),
    #[error("analysis request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
}

impl AnalysisError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Thin wrapper over `reqwest` bound to one analysis endpoint.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(endpoint, Client::new())
    }

    pub fn with_http_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Issue a single POST. No retries; timeouts are the caller's concern so the
    /// same client works on every target.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        debug!(
            endpoint = %self.endpoint,
            latitude = request.latitude,
            longitude = request.longitude,
            "posting field analysis request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| AnalysisError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AnalysisError::Transport(err.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "analysis service returned an error status");
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body: truncate_detail(body.trim()),
            });
        }

        let result = AnalysisResult::from_json(&body).map_err(|err| {
            warn!(%err, "analysis response failed validation");
            AnalysisError::from(err)
        })?;
        info!(status = status.as_u16(), "field analysis received");
        Ok(result)
    }
}

fn truncate_detail(body: &str) -> String {
    if body.len() <= MAX_BODY_DETAIL {
        return body.to_string();
    }
    let mut end = MAX_BODY_DETAIL;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
