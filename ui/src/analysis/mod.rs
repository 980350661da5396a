//! Field analysis: coordinate form, request lifecycle and report rendering.

mod requester;
mod samples;
mod view;

pub use requester::{
    run_analysis, AnalysisFailure, AnalysisPhase, AnalysisRequester, CoordinateForm,
    PendingAnalysis,
};
pub use samples::{SampleLocation, SAMPLE_LOCATIONS};
pub use view::{AnalysisPanel, AnalysisReport};
