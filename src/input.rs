//! Prediction input schema and feature-order constants.
//!
//! The model was trained on a fixed-order feature vector; everything that
//! assembles features must agree on that order, so it is declared once
//! here rather than rediscovered per call site.

use serde::{Deserialize, Serialize};

/// Categorical fields, in training feature order
pub const CATEGORICAL_FIELDS: [&str; 4] = ["crop", "soil_type", "region", "season"];

/// Full feature vector layout the model expects
pub const FEATURE_NAMES: [&str; 7] = [
    "crop",
    "soil_type",
    "region",
    "season",
    "rainfall",
    "temperature",
    "humidity",
];

/// Valid rainfall range in mm
pub const RAINFALL_RANGE: (f64, f64) = (0.0, 500.0);
/// Valid temperature range in °C
pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 50.0);
/// Valid humidity range in %
pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);

/// A validated prediction request, as seen by the serving core.
///
/// Range validation happens at the HTTP boundary; the core assumes the
/// numeric fields are already within their declared ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Crop type (e.g. wheat, rice, corn)
    pub crop: String,
    /// Soil type (e.g. loamy, clay, sandy)
    pub soil_type: String,
    /// Region (e.g. north-india, south-india)
    pub region: String,
    /// Season (e.g. kharif, rabi, zaid)
    pub season: String,
    /// Rainfall in mm, [0, 500]
    pub rainfall: f64,
    /// Temperature in °C, [0, 50]
    pub temperature: f64,
    /// Humidity in %, [0, 100]
    pub humidity: f64,
}

impl PredictionInput {
    /// The four categorical fields paired with their raw values, in
    /// training feature order. Replaces per-field reflection with an
    /// explicit list.
    #[must_use]
    pub fn categorical_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("crop", self.crop.as_str()),
            ("soil_type", self.soil_type.as_str()),
            ("region", self.region.as_str()),
            ("season", self.season.as_str()),
        ]
    }
}

/// Normalize a raw categorical value the same way the training pipeline
/// did before fitting its encoders: lowercase, surrounding whitespace
/// trimmed. Applied identically at serving time so codes stay consistent.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
