//! Field-analysis request lifecycle: `Idle -> Loading -> Success | Failure`.
//!
//! Every submission gets a fresh generation number. Outcomes are only applied
//! when they carry the current generation, so a cancelled or superseded
//! request can never overwrite newer state.

use std::time::Duration;

use api::{AnalysisClient, AnalysisError, AnalysisRequest, AnalysisResult};
use tracing::{debug, info, warn};

use crate::core::geolocation::Coordinates;
use crate::core::timing::with_timeout;

/// Raw text of the two coordinate inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateForm {
    pub latitude: String,
    pub longitude: String,
}

impl CoordinateForm {
    /// Both fields must hold a finite number. No range check.
    pub fn parse(&self) -> Option<AnalysisRequest> {
        let parse = |raw: &str| raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        Some(AnalysisRequest::new(
            parse(&self.latitude)?,
            parse(&self.longitude)?,
        ))
    }

    pub fn fill(&mut self, coordinates: Coordinates) {
        let (latitude, longitude) = coordinates.to_form_values();
        self.latitude = latitude;
        self.longitude = longitude;
    }
}

/// What the user sees when a request does not produce a result.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisFailure {
    pub status: Option<u16>,
    pub detail: String,
}

impl From<&AnalysisError> for AnalysisFailure {
    fn from(err: &AnalysisError) -> Self {
        Self {
            status: err.status(),
            detail: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Loading {
        generation: u64,
    },
    Success(AnalysisResult),
    Failure(AnalysisFailure),
}

/// A request the caller should now perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingAnalysis {
    pub generation: u64,
    pub request: AnalysisRequest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisRequester {
    phase: AnalysisPhase,
    generation: u64,
}

impl AnalysisRequester {
    pub fn phase(&self) -> &AnalysisPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Loading { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            AnalysisPhase::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&AnalysisFailure> {
        match &self.phase {
            AnalysisPhase::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Start a request. Rejected while another is in flight or when the form
    /// does not parse.
    pub fn begin(&mut self, form: &CoordinateForm) -> Option<PendingAnalysis> {
        if self.is_loading() {
            debug!("analysis already in flight; submission ignored");
            return None;
        }
        let request = form.parse()?;

        self.generation += 1;
        self.phase = AnalysisPhase::Loading {
            generation: self.generation,
        };
        info!(
            generation = self.generation,
            latitude = request.latitude,
            longitude = request.longitude,
            "analysis started"
        );

        Some(PendingAnalysis {
            generation: self.generation,
            request,
        })
    }

    /// Apply an outcome. Returns `false` when it belongs to a stale generation.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> bool {
        if self.phase != (AnalysisPhase::Loading { generation }) {
            debug!(generation, current = self.generation, "stale analysis outcome dropped");
            return false;
        }

        self.phase = match outcome {
            Ok(result) => {
                info!(generation, "analysis finished");
                AnalysisPhase::Success(result)
            }
            Err(err) => {
                warn!(generation, %err, "analysis failed");
                AnalysisPhase::Failure(AnalysisFailure::from(&err))
            }
        };
        true
    }

    /// Abandon the in-flight request, if any, and return to idle.
    pub fn cancel(&mut self) {
        if let AnalysisPhase::Loading { generation } = self.phase {
            info!(generation, "analysis cancelled");
            self.phase = AnalysisPhase::Idle;
        }
    }
}

/// Perform the POST, bounded by `timeout`.
pub async fn run_analysis(
    client: &AnalysisClient,
    request: AnalysisRequest,
    timeout: Duration,
) -> Result<AnalysisResult, AnalysisError> {
    match with_timeout(timeout, client.analyze(&request)).await {
        Some(outcome) => outcome,
        None => Err(AnalysisError::Timeout(timeout)),
    }
}
