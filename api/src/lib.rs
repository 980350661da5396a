//! Client side of the FarmSmart field-analysis service.
//!
//! The service accepts a pair of raw coordinates and answers with a loosely
//! shaped JSON document. This crate owns the wire contract:
//! - [`AnalysisRequest`] is the POST body.
//! - [`AnalysisResult`] is the validated response, every subtree optional.
//! - [`AnalysisClient`] performs the single request and classifies failures
//!   into [`AnalysisError`].

mod client;
mod model;

pub use client::{AnalysisClient, AnalysisError, DEFAULT_ANALYSIS_ENDPOINT};
pub use model::{
    AnalysisRequest, AnalysisResult, DecodeError, Hotspot, Hotspots, LandUse, SoilMoisture,
    VegetationIndex,
};
