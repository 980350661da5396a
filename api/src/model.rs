//! Wire types for the analysis endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// POST body. Coordinates are forwarded as-is; no range checks happen here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl AnalysisRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Validated analysis response.
///
/// Each section may be missing independently. A missing section and a `null`
/// section are treated the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndvi: Option<VegetationIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<SoilMoisture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_use: Option<LandUse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspots: Option<Hotspots>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VegetationIndex {
    #[serde(default)]
    pub healthy: Option<f64>,
    #[serde(default)]
    pub stressed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilMoisture {
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub needs_irrigation: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandUse {
    #[serde(default)]
    pub cropland: Option<f64>,
    #[serde(default)]
    pub baresoil: Option<f64>,
}

/// Critical areas. Absent lists decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotspots {
    #[serde(default)]
    pub moisture: Vec<Hotspot>,
    #[serde(default)]
    pub stress: Vec<Hotspot>,
}

impl Hotspots {
    pub fn is_empty(&self) -> bool {
        self.moisture.is_empty() && self.stress.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub location: String,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    Syntax(String),
    #[error("response must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("response has an unexpected shape: {0}")]
    Shape(String),
}

impl AnalysisResult {
    /// Decode a response body, rejecting anything that is not an object of the
    /// expected shape instead of rendering partial data.
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|err| DecodeError::Syntax(err.to_string()))?;

        let kind = match &value {
            serde_json::Value::Object(_) => None,
            serde_json::Value::Null => Some("null"),
            serde_json::Value::Bool(_) => Some("a boolean"),
            serde_json::Value::Number(_) => Some("a number"),
            serde_json::Value::String(_) => Some("a string"),
            serde_json::Value::Array(_) => Some("an array"),
        };
        if let Some(kind) = kind {
            return Err(DecodeError::NotAnObject(kind));
        }

        serde_json::from_value(value).map_err(|err| DecodeError::Shape(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_plain_number_fields() {
        let body = serde_json::to_string(&AnalysisRequest::new(30.9010, 75.8573)).unwrap();
        assert_eq!(body, r#"{"latitude":30.901,"longitude":75.8573}"#);
    }

    #[test]
    fn full_response_decodes() {
        let body = r#"{
            "ndvi": { "healthy": 72.5, "stressed": 27.5 },
            "soilMoisture": { "average": 41.2, "needsIrrigation": 18.0 },
            "landUse": { "cropland": 80.0, "baresoil": 20.0 },
            "hotspots": {
                "moisture": [{ "location": "North-east corner", "severity": "high" }],
                "stress": []
            }
        }"#;

        let result = AnalysisResult::from_json(body).unwrap();
        assert_eq!(result.ndvi.as_ref().and_then(|n| n.healthy), Some(72.5));
        assert_eq!(
            result.soil_moisture.as_ref().and_then(|s| s.needs_irrigation),
            Some(18.0)
        );
        let hotspots = result.hotspots.unwrap();
        assert_eq!(hotspots.moisture.len(), 1);
        assert_eq!(hotspots.moisture[0].severity, "high");
        assert!(hotspots.stress.is_empty());
    }

    #[test]
    fn empty_object_has_every_section_absent() {
        let result = AnalysisResult::from_json("{}").unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn partial_sections_and_nulls_are_tolerated() {
        let result =
            AnalysisResult::from_json(r#"{"ndvi":{"healthy":85.0},"landUse":null,"hotspots":{}}"#)
                .unwrap();
        let ndvi = result.ndvi.unwrap();
        assert_eq!(ndvi.healthy, Some(85.0));
        assert_eq!(ndvi.stressed, None);
        assert!(result.land_use.is_none());
        assert!(result.hotspots.unwrap().is_empty());
    }

    #[test]
    fn wrong_field_type_is_a_shape_error() {
        let err = AnalysisResult::from_json(r#"{"ndvi":{"healthy":"lots"}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert_eq!(
            AnalysisResult::from_json("[1, 2]").unwrap_err(),
            DecodeError::NotAnObject("an array")
        );
        assert_eq!(
            AnalysisResult::from_json("null").unwrap_err(),
            DecodeError::NotAnObject("null")
        );
        assert!(matches!(
            AnalysisResult::from_json("<html>").unwrap_err(),
            DecodeError::Syntax(_)
        ));
    }
}
